use serde::Deserialize;

// Form payloads as the browser posts them; field names match the HTML inputs.

#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub desc: Option<String>,
}

impl ExpenseForm {
    /// Browsers post an empty string for a blank optional field; treat that
    /// as no description.
    pub fn description(&self) -> Option<String> {
        self.desc
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from)
    }
}
