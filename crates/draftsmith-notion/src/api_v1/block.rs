use serde::Serialize;

/// A page body block. Only external images are needed so far.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Block {
    pub object: &'static str,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    pub fn external_image(url: impl Into<String>) -> Self {
        Self {
            object: "block",
            content: BlockContent::Image {
                image: FileObject::External {
                    external: ExternalFile { url: url.into() },
                },
            },
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Image { image: FileObject },
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    External { external: ExternalFile },
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ExternalFile {
    pub url: String,
}
