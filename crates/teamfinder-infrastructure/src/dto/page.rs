use serde::{Deserialize, Serialize};
use teamfinder_core::page::Page;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> PageDto<T> {
    /// Maps every item into the domain type.
    pub fn into_page<U>(self) -> Page<U>
    where
        T: Into<U>,
    {
        Page {
            offset: self.offset,
            limit: self.limit,
            total: self.total,
            items: self.items.into_iter().map(Into::into).collect(),
        }
    }

    /// Same as [`into_page`](Self::into_page) for fallible conversions.
    pub fn try_into_page<U, E>(self) -> Result<Page<U>, E>
    where
        T: TryInto<U, Error = E>,
    {
        let items = self
            .items
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<U>, E>>()?;
        Ok(Page {
            offset: self.offset,
            limit: self.limit,
            total: self.total,
            items,
        })
    }
}
