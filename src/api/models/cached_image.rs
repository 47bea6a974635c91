#[derive(Clone, Debug, PartialEq)]
pub struct CachedImage {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>
}
