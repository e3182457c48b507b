mod lookup;
mod use_cases;

pub use lookup::LookupServices;
pub use use_cases::UseCases;
