pub mod error;

pub mod models {
    pub mod conversion;
    pub mod file;
    pub mod format;
    pub mod output;
}

pub mod service {
    pub mod config_service;
    pub mod converter_service;
    pub mod environment_service;
    pub mod file_service;
    pub mod output_service;

    pub mod traits {
        pub mod i_service;
    }
}

pub mod facade {
    pub mod conversion_facade;

    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod convert;
    pub mod utils;
}

pub use error::ConversionError;
pub use facade::conversion_facade::ConversionOrchestrator;
pub use facade::traits::i_conversion::ConversionFacadeTrait;
pub use models::conversion::{ConversionOutcome, ConversionSummary};
pub use models::format::FormatRegistry;
