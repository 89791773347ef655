pub mod consts;
pub mod evaluation;
pub mod ordering;
pub mod searching;

pub mod prelude {
    // easier exporting
    pub use super::consts;
    pub use super::evaluation;
    pub use super::ordering;
    pub use super::searching;
}
