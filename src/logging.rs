use log::trace;

use crate::scanning::Scannable;
use crate::{util, LABEL, LOG_TARGET};
use std::fmt::Debug;

pub(crate) trait Loggable {
    const ITEM_WIDTH: usize = 20;
    const LABEL_WIDTH: usize = 15;
    fn log_advance<Args: Debug>(&self, op: &str, args: Args);
    fn log_hold<Args: Debug>(&self, op: &str, args: Args);
}

impl<C> Loggable for C
where
    C: Scannable,
{
    fn log_advance<Args: Debug>(&self, op: &str, args: Args) {
        trace!(
            target: LOG_TARGET,
            "{item:<iw$} {label:<lw$} : {operation} -> advanced",
            iw = Self::ITEM_WIDTH,
            lw = Self::LABEL_WIDTH,
            label = LABEL.with(|f| f.get()),
            item = util::preview(&self.peek()),
            operation = format!("{op}({args:?})"),
        );
    }

    fn log_hold<Args: Debug>(&self, op: &str, args: Args) {
        trace!(
            target: LOG_TARGET,
            "{item:<iw$} {label:<lw$} : {operation} -> held",
            iw = Self::ITEM_WIDTH,
            lw = Self::LABEL_WIDTH,
            label = LABEL.with(|f| f.get()),
            item = util::preview(&self.peek()),
            operation = format!("{op}({args:?})"),
        );
    }
}
