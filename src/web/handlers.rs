use crate::core::errors::LedgerError;
use crate::core::models::User;
use crate::core::services::LedgerService;
use crate::infrastructure::sessions::in_memory::InMemorySessions;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::web::forms::{ExpenseForm, LoginForm, RegisterForm};
use crate::web::views;
use axum::{
    Extension, Form, Router,
    extract::{FromRef, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};
use std::sync::Arc;

const SESSION_COOKIE: &str = "outlay_session";

type Service = LedgerService<InMemoryStorage, InMemorySessions>;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/// The authenticated user for this request, resolved once by the gate
/// middleware and handed to handlers as an extension.
#[derive(Clone)]
pub struct CurrentUser(pub User);

// Newtype so LedgerError can flow out of handlers as an HTML response.
pub struct WebError(LedgerError);

impl From<LedgerError> for WebError {
    fn from(err: LedgerError) -> Self {
        WebError(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title) = match &self.0 {
            LedgerError::ExpenseNotFound(_) | LedgerError::UserNotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            LedgerError::ExpenseNotOwned(_) => (StatusCode::FORBIDDEN, "Forbidden"),
            LedgerError::DuplicateEmail(_)
            | LedgerError::WeakPassword
            | LedgerError::AuthFailure
            | LedgerError::InvalidAmount(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            LedgerError::StorageError(_) | LedgerError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        (status, Html(views::error_page(title, &self.0.to_string()))).into_response()
    }
}

/// Gate in front of every expense route: resolves the session cookie to a
/// user or redirects. The landing page sends newcomers to registration,
/// everything else to login.
async fn require_user(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, WebError> {
    let jar = SignedCookieJar::from_headers(req.headers(), state.cookie_key.clone());
    let user = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.service.current_user(cookie.value()).await?,
        None => None,
    };

    match user {
        Some(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        None => {
            let target = if req.uri().path() == "/" { "/register" } else { "/login" };
            Ok(Redirect::to(target).into_response())
        }
    }
}

async fn session_user(state: &AppState, jar: &SignedCookieJar) -> Result<Option<User>, WebError> {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => Ok(state.service.current_user(cookie.value()).await?),
        None => Ok(None),
    }
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token)).path("/").http_only(true).build()
}

fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

async fn register_form(State(state): State<AppState>, jar: SignedCookieJar) -> Result<Response, WebError> {
    if session_user(&state, &jar).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(Html(views::register_page(None)).into_response())
}

async fn register_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, WebError> {
    if session_user(&state, &jar).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    match state.service.register(&form.email, &form.user_name, &form.password).await {
        Ok(user) => {
            let token = state.service.start_session(user.id).await?;
            Ok((jar.add(session_cookie(token)), Redirect::to("/")).into_response())
        }
        Err(err @ (LedgerError::WeakPassword | LedgerError::DuplicateEmail(_))) => {
            Ok(Html(views::register_page(Some(&err.to_string()))).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn login_form(State(state): State<AppState>, jar: SignedCookieJar) -> Result<Response, WebError> {
    if session_user(&state, &jar).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(Html(views::login_page(None)).into_response())
}

async fn login_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    if session_user(&state, &jar).await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    match state.service.login(&form.email, &form.password).await {
        Ok(user) => {
            let token = state.service.start_session(user.id).await?;
            Ok((jar.add(session_cookie(token)), Redirect::to("/")).into_response())
        }
        Err(err @ LedgerError::AuthFailure) => Ok(Html(views::login_page(Some(&err.to_string()))).into_response()),
        Err(err) => Err(err.into()),
    }
}

async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> Result<Response, WebError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.service.end_session(cookie.value()).await?;
    }
    Ok((jar.remove(expired_session_cookie()), Redirect::to("/login")).into_response())
}

async fn home(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Html<String>, WebError> {
    let expenses = state.service.expenses_for(user.id).await?;
    let total = state.service.total_for(user.id).await?;
    Ok(Html(views::index_page(&user, &expenses, total)))
}

async fn add_form() -> Html<String> {
    Html(views::add_expense_page(None))
}

async fn add_submit(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, WebError> {
    match state
        .service
        .add_expense(user.id, &form.title, &form.amount, &form.category, form.description())
        .await
    {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(err @ LedgerError::InvalidAmount(_)) => {
            Ok(Html(views::add_expense_page(Some(&err.to_string()))).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn edit_form(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let expense = state.service.expense_for_edit(user.id, id).await?;
    Ok(Html(views::edit_expense_page(&expense, None)))
}

async fn edit_submit(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, WebError> {
    match state
        .service
        .update_expense(user.id, id, &form.title, &form.amount, &form.category, form.description())
        .await
    {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(err @ LedgerError::InvalidAmount(_)) => {
            // The stored record is untouched; re-show it with the message.
            let expense = state.service.expense_for_edit(user.id, id).await?;
            Ok(Html(views::edit_expense_page(&expense, Some(&err.to_string()))).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn delete_expense(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    state.service.delete_expense(user.id, id).await?;
    Ok(Redirect::to("/"))
}

pub fn routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(home))
        .route("/add", get(add_form).post(add_submit))
        .route("/edit/{id}", get(edit_form).post(edit_submit))
        .route("/delete/{id}", get(delete_expense).post(delete_expense))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    Router::new()
        .route("/register", get(register_form).post(register_submit))
        .route("/login", get(login_form).post(login_submit))
        .route("/logout", get(logout).post(logout))
        .merge(protected)
        .with_state(state)
}
