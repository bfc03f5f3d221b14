//! Typed identifiers
//!
//! Wraps a raw key (a store-generated integer or a UUID) with a phantom marker
//! so ids of different records cannot be mixed up.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use uuid::Uuid;

pub struct TypedId<T, K = Uuid>(K, PhantomData<fn() -> T>);

impl<T, K> TypedId<T, K> {
    pub const fn from_raw(raw: K) -> Self {
        Self(raw, PhantomData)
    }

    pub fn into_raw(self) -> K {
        self.0
    }
}

impl<T> TypedId<T, Uuid> {
    /// Generate a fresh time-ordered UUID.
    #[must_use]
    pub fn new() -> Self {
        Self::from_raw(Uuid::now_v7())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self::from_raw(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl<T> Default for TypedId<T, Uuid> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TypedId<T, i64> {
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl<T, K: Copy> Clone for TypedId<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K: Copy> Copy for TypedId<T, K> {}

impl<T, K: Debug> Debug for TypedId<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T, K: Display> Display for TypedId<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T, K: PartialEq> PartialEq for TypedId<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T, K: Eq> Eq for TypedId<T, K> {}

impl<T, K: Hash> Hash for TypedId<T, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T, K: Ord> PartialOrd for TypedId<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for TypedId<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, K: FromStr> FromStr for TypedId<T, K> {
    type Err = K::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse().map(Self::from_raw)
    }
}

impl<T> From<Uuid> for TypedId<T, Uuid> {
    fn from(value: Uuid) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<TypedId<T, Uuid>> for Uuid {
    fn from(value: TypedId<T, Uuid>) -> Self {
        value.into_raw()
    }
}
