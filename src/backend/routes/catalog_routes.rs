/**
 * Catalog Route Handlers
 *
 * Books, quotes, and users. Every route here requires a bearer token
 * except `POST /users`.
 *
 * # Routes
 *
 * ## Books
 * - `GET /books`, `POST /books`
 * - `GET /books/{id}`, `PUT /books/{id}`, `DELETE /books/{id}`
 *
 * ## Quotes
 * - `GET /quotes`, `POST /quotes`
 * - `GET /quotes/{id}`, `PUT /quotes/{id}`, `DELETE /quotes/{id}`
 * - `PATCH /quotes/{id}/favorite` - Favorite toggle with the limit check
 *
 * ## Users
 * - `GET /users`, `POST /users`
 * - `GET /users/favoriteQuotes`
 * - `GET /users/{id}`, `PUT /users/{id}`, `DELETE /users/{id}`
 * - `GET /users/{id}/books`, `GET /users/{id}/quotes`
 */

use axum::{
    routing::{get, patch},
    Router,
};

use crate::backend::books::handlers as books;
use crate::backend::quotes::handlers as quotes;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers as users;

/// Configure book routes
pub fn configure_book_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
}

/// Configure quote routes
pub fn configure_quote_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/quotes", get(quotes::list_quotes).post(quotes::create_quote))
        .route(
            "/quotes/{id}",
            get(quotes::get_quote)
                .put(quotes::update_quote)
                .delete(quotes::delete_quote),
        )
        .route("/quotes/{id}/favorite", patch(quotes::set_favorite))
}

/// Configure user routes
///
/// `/users/favoriteQuotes` is a static segment, so it takes precedence over
/// `/users/{id}`.
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/favoriteQuotes", get(users::list_users_favorite_quotes))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{id}/books", get(users::get_user_books))
        .route("/users/{id}/quotes", get(users::get_user_quotes))
}

/// Configure all catalog routes
pub fn configure_catalog_routes(router: Router<AppState>) -> Router<AppState> {
    let router = configure_book_routes(router);
    let router = configure_quote_routes(router);
    configure_user_routes(router)
}
