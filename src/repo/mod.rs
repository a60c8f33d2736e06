//! Data access for the two entities.

mod laboratory;
mod student;

pub use laboratory::LaboratoryRepo;
pub use student::StudentRepo;
