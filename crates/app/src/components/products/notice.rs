//! One-shot notices returned by completed actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ProductAdded,
    ProductSaved,
    ProductDeleted,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ProductAdded => "Product Added Successfully",
            Self::ProductSaved => "Product Saved Successfully",
            Self::ProductDeleted => "Product Deleted Successfully",
        }
    }
}
