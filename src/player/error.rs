use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Track catalog is empty")]
    Empty,

    #[error("Track name at position {0} is blank")]
    BlankName(usize),
}
