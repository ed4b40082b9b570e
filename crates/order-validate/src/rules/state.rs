use order_model::Order;

use crate::options::ValidationOptions;

/// Rejects orders shipping to a banned state.
pub fn is_allowed_state(order: &Order, options: &ValidationOptions) -> bool {
    !options.is_banned_state(&order.state)
}
