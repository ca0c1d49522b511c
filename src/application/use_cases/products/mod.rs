//! Product Use Cases
//!
//! Business logic for managing products.

mod create_product;
mod delete_product;
mod get_product;
mod list_products;
mod update_product;

pub use create_product::CreateProductUseCase;
pub use delete_product::DeleteProductUseCase;
pub use get_product::GetProductUseCase;
pub use list_products::ListProductsUseCase;
pub use update_product::UpdateProductUseCase;
