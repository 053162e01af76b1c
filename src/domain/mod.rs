pub mod config;
pub mod consultation;
pub mod error;
pub mod prompt;
pub mod selection;
pub mod stability;

pub use config::{AppConfig, CONFIG_FILE, ImageApiConfig};
pub use consultation::{Consultation, ConsultationRecord};
pub use error::AppError;
pub use selection::{
    CheekboneType, FaceShape, ForeheadType, HairStyle, JawType, NeckLength, NeckThickness,
    Selection, ShoulderShape,
};
pub use stability::{StabilityGrade, grade};
