use crate::domain::errors::DomainError;

const CNT_ARTICLE_AUTHOR: &str = "article_authors_article_author_key";
const CNT_ARTICLE_TAG: &str = "article_tags_article_name_key";
const CNT_ARTICLE_STATUS: &str = "articles_status_chk";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "articles_published_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // other constraints fall through to the SQLSTATE mapping
            match db_err.constraint() {
                Some(CNT_ARTICLE_AUTHOR) => {
                    return DomainError::conflict("author already attached to article");
                }
                Some(CNT_ARTICLE_TAG) => {
                    return DomainError::conflict("tag already attached to article");
                }
                Some(CNT_ARTICLE_STATUS) => {
                    return DomainError::validation("unknown publication status");
                }
                Some(CNT_ARTICLE_PUBLISHED_CHECK) => {
                    return DomainError::invariant(
                        "published articles require published_at and drafts must not have one",
                    );
                }
                _ => {}
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => return DomainError::conflict("unique constraint violated"),
                    "23503" => return DomainError::not_found("referenced record not found"),
                    "23514" => return DomainError::validation("check constraint violated"),
                    _ => {}
                }
            }

            DomainError::persistence(db_err.message().to_string())
        }
        _ => DomainError::persistence(err.to_string()),
    }
}
