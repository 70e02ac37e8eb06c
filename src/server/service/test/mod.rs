use entity::article::ArticleStatus;

use crate::server::model::article::{ArticleFields, CreateArticleParams};

mod comment;

fn article_params(title: &str, content: &str, tag_ids: Vec<i32>) -> CreateArticleParams {
    CreateArticleParams {
        fields: ArticleFields {
            title: title.to_string(),
            content: content.to_string(),
            summary: String::new(),
            cover_img: String::new(),
            category_id: None,
            status: ArticleStatus::Published,
            is_top: false,
        },
        tag_ids,
    }
}
