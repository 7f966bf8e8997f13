pub mod donor;
pub mod expenditures;
pub mod fetch;
pub mod format;
pub mod races;
pub mod render;
pub mod text;

pub use crate::domain::model::{
    CandidateName, Company, Contribution, DonorIdentity, Expenditure, IndividualConstant,
};
pub use crate::domain::ports::{ConfigProvider, ConstantSource};
pub use crate::utils::error::Result;
