//! Backend paths, relative to the client's base URL.

/// Document store endpoints.
pub mod documents {
    pub const LIST: &str = "/documents";

    pub fn get(document_id: &str) -> String {
        format!("/documents/{}.json", document_id)
    }

    pub fn preview(document_id: &str) -> String {
        format!("/documents/{}/preview", document_id)
    }

    pub fn delete(document_id: &str) -> String {
        format!("/documents/{}", document_id)
    }
}

/// A stage of the ingestion pipeline, each served by its own endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Load,
    Parse,
    Chunk,
    Embed,
    Index,
    Search,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Load,
        Stage::Parse,
        Stage::Chunk,
        Stage::Embed,
        Stage::Index,
        Stage::Search,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Stage::Load => "/load",
            Stage::Parse => "/parse",
            Stage::Chunk => "/chunk",
            Stage::Embed => "/embed",
            Stage::Index => "/index",
            Stage::Search => "/search",
        }
    }

    /// Operation name used when reporting a failed stage.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Load => "加载文档",
            Stage::Parse => "解析文档",
            Stage::Chunk => "文本分块",
            Stage::Embed => "信息嵌入",
            Stage::Index => "向量存储",
            Stage::Search => "信息检索",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_paths() {
        assert_eq!(documents::get("abc"), "/documents/abc.json");
        assert_eq!(documents::preview("abc"), "/documents/abc/preview");
        assert_eq!(documents::delete("abc"), "/documents/abc");
    }

    #[test]
    fn stage_paths_are_distinct() {
        let mut paths: Vec<&str> = Stage::ALL.iter().map(Stage::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Stage::ALL.len());
    }
}
