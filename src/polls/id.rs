use std::clone::Clone;
use std::cmp::{Eq, PartialEq};
use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Id(pub Uuid);
impl Id {
    pub fn new() -> Id {
        Id(Uuid::new_v4())
    }
}
impl Display for Id {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Uuid> for Id {
    fn from(value: Uuid) -> Id {
        Id(value)
    }
}
