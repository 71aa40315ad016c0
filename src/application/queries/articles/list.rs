use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleListItemDto, PaginatedList},
    error::{ApplicationResult, ValidationErrors},
    validation::{Validate, messages},
};

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct GetArticlesListQuery {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for GetArticlesListQuery {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Validate for GetArticlesListQuery {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        errors.check(self.page_number < 1, "page_number", messages::PAGE_NUMBER_MIN);
        errors.check(self.page_size < 1, "page_size", messages::PAGE_SIZE_MIN);
    }
}

impl ArticleQueryService {
    pub async fn get_articles_list(
        &self,
        query: GetArticlesListQuery,
    ) -> ApplicationResult<PaginatedList<ArticleListItemDto>> {
        query.validate()?;
        let page = self.repo.get_all(query.page_number, query.page_size).await?;

        let items = page.items.into_iter().map(Into::into).collect();
        Ok(PaginatedList::new(
            items,
            page.total_count,
            query.page_number,
            query.page_size,
        ))
    }
}
