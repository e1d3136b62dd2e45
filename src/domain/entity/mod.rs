pub mod user;

use uuid::Uuid;

pub trait Entity {
    fn ident(&self) -> Uuid;
}

macro_rules! state_ref {
    ($prop:ident, $rtrn:ty) => {
        pub fn $prop(&self) -> &$rtrn {
            &self.state.$prop
        }
    };
}

pub(self) use state_ref;
