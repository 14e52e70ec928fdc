pub(crate) mod descriptor;
pub(crate) mod sequencer;
pub(crate) mod state;
