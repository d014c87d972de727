//! Rendering helpers for human-readable package summaries.

use stockpack_domain::Package;
use stockpack_types::UnitState;

/// One-line summary: `"<variant name> <state>"` per entry, joined by `" / "`.
pub fn inspect(package: &Package) -> String {
    package
        .contents()
        .map(|item| format!("{} {}", item.variant().name, item.state()))
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn render_package_md(package: &Package) -> String {
    let mut out = String::new();
    let location = package.location();
    out.push_str(&format!(
        "# package from {} (`{}`)\n\n",
        location.name, location.id.0
    ));
    out.push_str(&format!(
        "- Quantity: {} ({} entries)\n",
        package.quantity(None),
        package.len()
    ));
    for state in [
        UnitState::OnHand,
        UnitState::Backordered,
        UnitState::AwaitingFeed,
    ] {
        out.push_str(&format!(
            "  - `{}`: {}\n",
            state,
            package.quantity(Some(state))
        ));
    }
    out.push_str(&format!("- Weight: {}\n", package.weight()));
    if let Some(order) = package.order() {
        out.push_str(&format!("- Order: {}\n", order.number));
    }

    let methods = package.shipping_methods();
    if methods.is_empty() {
        out.push_str("- Shipping methods: _none_\n");
    } else {
        let names: Vec<String> = methods.iter().map(|m| format!("`{}`", m.name)).collect();
        out.push_str(&format!("- Shipping methods: {}\n", names.join(", ")));
    }
    out.push_str(&format!("- Rate quotes: {}\n\n", package.shipping_rates().len()));

    out.push_str("## Items\n\n");
    if package.contents().next().is_none() {
        out.push_str("_No items._\n");
        return out;
    }

    for (i, item) in package.contents().enumerate() {
        let variant = item.variant();
        out.push_str(&format!(
            "{}. {} (`{}`) x{} `{}`\n",
            i + 1,
            variant.name,
            variant.sku,
            item.quantity(),
            item.state()
        ));
    }

    out
}
