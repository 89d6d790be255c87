#[cfg(feature = "tracing")]
macro_rules! dtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "windowed_list_dom", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! dwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "windowed_list_dom", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dwarn {
    ($($tt:tt)*) => {};
}
