use crate::domain::errors::DomainError;

const CNT_MOVIE_SLUG: &str = "movies_slug_key";
const CNT_BOOK_SLUG: &str = "books_slug_key";
const CNT_TRIP_SLUG: &str = "trips_slug_key";
const CNT_RESTAURANT_SLUG: &str = "restaurants_slug_key";
const CNT_TRIP_DATES: &str = "trips_dates_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_MOVIE_SLUG | CNT_BOOK_SLUG | CNT_TRIP_SLUG | CNT_RESTAURANT_SLUG => {
                        DomainError::Conflict(format!("slug already exists ({constraint})"))
                    }
                    CNT_TRIP_DATES => {
                        DomainError::Validation("ended_on cannot be before started_on".into())
                    }
                    other if db_err.code().as_deref() == Some("23514") => {
                        DomainError::Validation(format!("check constraint violated: {other}"))
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
