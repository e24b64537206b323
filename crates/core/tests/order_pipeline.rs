//! End-to-end validation pipeline built only from outcome composition.

use railyard_core::{
    Error, ErrorType, FailureBuilder, Outcome, OutcomeExt, codes, combine, fail, query, success,
    success_with,
};

#[derive(Debug, Clone, PartialEq)]
struct OrderLine {
    sku: String,
    quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Order {
    customer: String,
    lines: Vec<OrderLine>,
}

fn require(field: &str, value: &str) -> Outcome {
    if value.trim().is_empty() {
        fail(Error::validation(codes::VALIDATION_REQUIRED, format!("{field} is required")))
    } else {
        success()
    }
}

fn parse_line(raw: &str) -> Outcome<OrderLine> {
    let Some((sku, qty)) = raw.split_once(':') else {
        return fail(Error::validation(codes::VALIDATION_FORMAT, format!("malformed line `{raw}`")));
    };

    let quantity: u32 = qty
        .parse()
        .map_err(|_| Error::validation(codes::VALIDATION_FORMAT, format!("bad quantity `{qty}`")))?;

    success_with(OrderLine {
        sku: sku.to_string(),
        quantity,
    })
    .ensure_else(
        |line| line.quantity > 0,
        |line| Error::validation(codes::VALIDATION_FORMAT, format!("{} has zero quantity", line.sku)),
    )
}

fn parse_order(customer: &str, raw_lines: &[&str]) -> Outcome<Order> {
    let parsed: Vec<Outcome<OrderLine>> = raw_lines.iter().map(|raw| parse_line(raw)).collect();

    let mut all = vec![require("customer", customer)];
    all.extend(parsed.iter().cloned().map(|line| line.map_to(())));

    combine(all)
        .tap_error(|errors| tracing::warn!(count = errors.len(), "order rejected"))
        .bind(|()| {
            let lines = parsed.into_iter().collect::<Outcome<Vec<_>>>()?;
            success_with(Order {
                customer: customer.to_string(),
                lines,
            })
        })
        .tap(|order| tracing::info!(lines = order.lines.len(), "order accepted"))
}

#[test]
fn valid_order_is_accepted() {
    railyard_observability::init();

    let order = parse_order("acme", &["widget:2", "gadget:1"]);

    assert_eq!(order.value().lines.len(), 2);
    assert_eq!(order.value().lines[0].sku, "widget");
}

#[test]
fn every_problem_is_reported_in_input_order() {
    railyard_observability::init();

    let order = parse_order(" ", &["widget:0", "nocolon", "gadget:x"]);
    let seen: Vec<_> = order.errors().iter().map(Error::message).collect();

    assert_eq!(
        seen,
        vec![
            "customer is required",
            "widget has zero quantity",
            "malformed line `nocolon`",
            "bad quantity `x`",
        ]
    );
}

#[test]
fn builder_and_query_compose() {
    let stock = |sku: &str| -> Outcome<u32> {
        match sku {
            "widget" => success_with(10),
            _ => fail(Error::not_found(codes::NOT_FOUND, format!("{sku} not stocked"))),
        }
    };

    let reserved = query! {
        from line in parse_line("widget:4");
        from available in stock(&line.sku);
        where available >= line.quantity;
        select available - line.quantity
    };
    assert_eq!(reserved, Ok(6));

    let missing = query! {
        from line in parse_line("bolt:1");
        from available in stock(&line.sku);
        select available - line.quantity
    };
    assert_eq!(missing.errors()[0].error_type(), ErrorType::NotFound);

    let mut builder = FailureBuilder::new();
    for outcome in [reserved.map_to(()), missing.map_to(())] {
        if let Err(errors) = outcome {
            builder.add_errors(errors);
        }
    }
    let summary: Outcome = builder.build();
    assert_eq!(summary.errors().len(), 1);
}
