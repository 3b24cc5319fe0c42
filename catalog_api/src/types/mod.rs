mod product;
pub use self::product::{NewProduct, Product, ProductID, ProductUpdate};

mod user;
pub use self::user::{NewUser, TokenResponse, User};
