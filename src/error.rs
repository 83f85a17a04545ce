use thiserror::Error;

/// Failures while turning a dropped file into an image element.
///
/// None of these reach the user: a drop that fails is rejected silently
/// (logged only) and the document is left untouched.
#[derive(Debug, Error)]
pub enum DropError {
    #[error("dropped file is not an image")]
    NotAnImage,

    #[error("dropped outside the canvas")]
    OutsideCanvas,

    #[error("dropped file has no readable data")]
    NoData,

    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode image data: {0}")]
    Decode(#[from] image::ImageError),
}
