/// My ternary expression handler.  While it may seem redundant, it's
/// surprisingly useful when working with index tables full of edge
/// cases, such as "which source column does this target column come
/// from" during an insertion or a removal.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
