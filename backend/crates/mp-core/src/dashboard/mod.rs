pub mod admin_overview;
pub mod technician_dashboard;
