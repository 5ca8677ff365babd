//! HTTP surface of the dispatch layer.

mod dto;
mod error;
mod handlers;
mod router;

pub use self::dto::{
    FieldDto, LanguageDto, NasalsModeDto, NormalizeRequest, NormalizeResponse, SchemaDto,
    ValidateOptionsRequest, ValidateOptionsResponse,
};
pub use self::router::normalization_router;
