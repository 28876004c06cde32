//! Server-rendered pages. Plain string assembly keeps the surface small; a
//! template engine would be overkill for six pages of forms.

use crate::core::models::{Expense, User};

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title} - Outlay</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", escape(message)),
        None => String::new(),
    }
}

pub fn register_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Register</h1>\n{banner}<form method=\"post\" action=\"/register\">\n\
         <label>Email <input type=\"email\" name=\"email\" required></label><br>\n\
         <label>Name <input type=\"text\" name=\"userName\" required></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label><br>\n\
         <button type=\"submit\">Create account</button>\n</form>\n\
         <p>Already have an account? <a href=\"/login\">Log in</a></p>",
        banner = error_banner(error),
    );
    layout("Register", &body)
}

pub fn login_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Log in</h1>\n{banner}<form method=\"post\" action=\"/login\">\n\
         <label>Email <input type=\"email\" name=\"email\" required></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label><br>\n\
         <button type=\"submit\">Log in</button>\n</form>\n\
         <p>New here? <a href=\"/register\">Register</a></p>",
        banner = error_banner(error),
    );
    layout("Log in", &body)
}

pub fn index_page(user: &User, expenses: &[Expense], total: f64) -> String {
    let mut rows = String::new();
    for expense in expenses {
        rows.push_str(&format!(
            "<tr><td>{title}</td><td>{amount:.2}</td><td>{category}</td><td>{description}</td>\
             <td>{created}</td>\
             <td><a href=\"/edit/{id}\">Edit</a> \
             <form method=\"post\" action=\"/delete/{id}\" style=\"display:inline\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n",
            title = escape(&expense.title),
            amount = expense.amount,
            category = escape(&expense.category),
            description = escape(expense.description.as_deref().unwrap_or("")),
            created = expense.created_at.format("%Y-%m-%d %H:%M"),
            id = expense.id,
        ));
    }
    let body = format!(
        "<h1>Expenses</h1>\n<p>Signed in as {name} (<a href=\"/logout\">Log out</a>)</p>\n\
         <p><a href=\"/add\">Add expense</a></p>\n\
         <table>\n<tr><th>Title</th><th>Amount</th><th>Category</th><th>Description</th><th>Created</th><th></th></tr>\n\
         {rows}</table>\n<p>Total: {total:.2}</p>",
        name = escape(&user.name),
    );
    layout("Expenses", &body)
}

pub fn add_expense_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Add expense</h1>\n{banner}<form method=\"post\" action=\"/add\">\n\
         <label>Title <input type=\"text\" name=\"title\" required></label><br>\n\
         <label>Amount <input type=\"text\" name=\"amount\" required></label><br>\n\
         <label>Category <input type=\"text\" name=\"category\" required></label><br>\n\
         <label>Description <input type=\"text\" name=\"desc\"></label><br>\n\
         <button type=\"submit\">Add</button>\n</form>\n\
         <p><a href=\"/\">Back</a></p>",
        banner = error_banner(error),
    );
    layout("Add expense", &body)
}

pub fn edit_expense_page(expense: &Expense, error: Option<&str>) -> String {
    let body = format!(
        "<h1>Edit expense</h1>\n{banner}<form method=\"post\" action=\"/edit/{id}\">\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{title}\" required></label><br>\n\
         <label>Amount <input type=\"text\" name=\"amount\" value=\"{amount}\" required></label><br>\n\
         <label>Category <input type=\"text\" name=\"category\" value=\"{category}\" required></label><br>\n\
         <label>Description <input type=\"text\" name=\"desc\" value=\"{description}\"></label><br>\n\
         <button type=\"submit\">Save</button>\n</form>\n\
         <p><a href=\"/\">Back</a></p>",
        banner = error_banner(error),
        id = expense.id,
        title = escape(&expense.title),
        amount = expense.amount,
        category = escape(&expense.category),
        description = escape(expense.description.as_deref().unwrap_or("")),
    );
    layout("Edit expense", &body)
}

pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>",
        escape(title),
        escape(message)
    );
    layout(title, &body)
}
