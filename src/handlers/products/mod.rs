mod create;
mod delete;
mod list;
mod show;
mod update;

pub use create::products_post;
pub use delete::product_delete;
pub use list::products_get;
pub use show::product_get;
pub use update::product_put;
