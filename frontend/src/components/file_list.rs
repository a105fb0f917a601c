use leptos::*;
use papercheck::{FileKind, StagedFile, StagedId};

use crate::services::{BrowserFile, ObjectUrl};

/// Display data of one staged file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub id: StagedId,
    pub name: String,
    pub size_label: String,
    pub kind: FileKind,
    pub preview_url: Option<String>,
}

impl From<&StagedFile<BrowserFile, ObjectUrl>> for FileRow {
    fn from(file: &StagedFile<BrowserFile, ObjectUrl>) -> Self {
        Self {
            id: file.id(),
            name: file.name().to_string(),
            size_label: file.size_label(),
            kind: file.kind(),
            preview_url: file.preview().map(|p| p.as_str().to_string()),
        }
    }
}

/// Icon shown when there is no image preview.
pub fn kind_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Pdf => "📄",
        FileKind::Image => "🖼️",
        FileKind::Other => "📁",
    }
}

#[component]
pub fn FileList(
    #[prop(into)] rows: Signal<Vec<FileRow>>,
    #[prop(into)] on_remove: Callback<StagedId>,
    /// Remove buttons are disabled while a submission runs.
    #[prop(into)]
    locked: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || !rows.with(Vec::is_empty) fallback=|| ()>
            <div class="file-list">
                <h3 class="file-list-title">
                    "Uploaded Files (" {move || rows.with(Vec::len)} ")"
                </h3>
                <For
                    each=move || rows.get()
                    key=|row| row.id
                    children=move |row| {
                        let id = row.id;
                        let thumb = match row.preview_url {
                            Some(url) => view! {
                                <img src=url alt="Preview" class="file-thumb"/>
                            }.into_view(),
                            None => view! {
                                <div class="file-thumb file-icon">{kind_icon(row.kind)}</div>
                            }.into_view(),
                        };
                        view! {
                            <div class="file-row">
                                {thumb}
                                <div class="file-meta">
                                    <p class="file-name">{row.name}</p>
                                    <p class="file-size">{row.size_label}</p>
                                </div>
                                <button
                                    class="file-remove"
                                    aria-label="Remove file"
                                    disabled=move || locked.get()
                                    on:click=move |_| on_remove.call(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_icon() {
        assert_eq!(kind_icon(FileKind::Pdf), "📄");
        assert_eq!(kind_icon(FileKind::from_mime("image/png")), "🖼️");
        assert_eq!(kind_icon(FileKind::from_mime("text/plain")), "📁");
    }
}
