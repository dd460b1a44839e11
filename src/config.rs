pub fn get_relay_url() -> &'static str {
    "https://api.web3forms.com/submit"
}

// The Web3Forms key identifies the site to the relay and is injected at
// build time, so the bundle never ships a placeholder literal.
pub fn get_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}
