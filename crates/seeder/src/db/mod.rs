//! Database access for the seeding run.
//!
//! [`Session`] owns the single connection and exposes one method per
//! statement kind; [`Seeder`] walks the schema and dataset through it.

mod seeder;
mod session;

pub use seeder::Seeder;
pub use session::Session;
