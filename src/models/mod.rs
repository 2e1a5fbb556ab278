mod product;
mod product_id;
mod response;

pub use product::*;
pub use product_id::ProductId;
pub use response::ApiResponse;
