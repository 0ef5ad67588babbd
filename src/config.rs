// Base URL of the app this landing page hands visitors off to.
// Override at build time, e.g. `APP_URL=https://app.vetori.io trunk build --release`.
pub fn get_app_url() -> &'static str {
    option_env!("APP_URL").unwrap_or("http://localhost:3000")
}

pub fn login_url() -> String {
    format!("{}/login", get_app_url())
}

pub fn signup_url() -> String {
    format!("{}/signup", get_app_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_targets_share_the_base_url() {
        assert_eq!(login_url(), format!("{}/login", get_app_url()));
        assert_eq!(signup_url(), format!("{}/signup", get_app_url()));
    }
}
