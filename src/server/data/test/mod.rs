mod article_tag;
mod comment;
mod tag;
