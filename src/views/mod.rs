pub mod country_detail;
pub mod home;
pub mod layout;

pub use country_detail::CountryDetailView;
pub use home::HomeView;

pub fn country_route(country_id: i64) -> String {
    format!("/country/{country_id}")
}
