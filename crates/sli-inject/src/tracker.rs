use sli_core::{Identifier, Order, SliSettings, TotalKind};

/// Conversion tracker snippet for a completed order.
///
/// Empty unless conversion tracking is enabled and an order was captured
/// for the current request. The emitted call sequence is fixed: bootstrap
/// load, tracker construction, page type, transaction, one item per order
/// line, then the two write calls.
pub fn conversion_tracker(settings: &SliSettings, order: Option<&Order>) -> String {
    if !settings.conversion_tracker {
        return String::new();
    }
    let Some(order) = order else {
        return String::new();
    };

    let mut item_lines = String::new();
    for item in &order.items {
        let identifier = match settings.identifier {
            Identifier::Model => item.model.as_str(),
            Identifier::ProductId => item.product_id.as_str(),
        };
        item_lines.push_str(&format!(
            r#"spark.addItem("{}", "{}", "{}");"#,
            identifier,
            item.quantity,
            format_amount(item.unit_price),
        ));
    }

    let total = format_amount(order.total_amount(TotalKind::Total).unwrap_or(0.0));
    let shipping = format_amount(order.total_amount(TotalKind::Shipping).unwrap_or(0.0));
    let tax = format_amount(order.total_amount(TotalKind::Tax).unwrap_or(0.0));

    format!(
        r#"<script type="text/javascript">
var sliSparkJsHost = (("https:" == document.location.protocol) ? "https://" : "http://");
document.write(unescape("%3Cscript src='" + sliSparkJsHost + "b.sli-spark.com/sli-spark.js' type='text/javascript'%3E%3C/script%3E"));
</script>
<script language="javascript" type="text/javascript">
var spark= new SliSpark("{client_id}", "1");
spark.setPageType("checkout-confirmation");
spark.addTransaction("{order_id}", "{account_id}", "{total}", "{shipping}", "{tax}");
{item_lines};
spark.writeTrackCode();
spark.writeTransactionCode();
</script>"#,
        client_id = settings.client_id,
        order_id = order.id,
        account_id = order.account_id,
        total = total,
        shipping = shipping,
        tax = tax,
        item_lines = item_lines,
    )
}

/// Formats a decimal amount with exactly two fraction digits, `.` as the
/// separator, and no thousands grouping, independent of host locale.
///
/// Rounding is half-away-from-zero over the shortest decimal rendering of
/// the input, so `9.995` becomes `"10.00"` even though its nearest binary
/// double sits just below the tie.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }

    let rounded = round_decimal(&format!("{}", value.abs()));

    if value < 0.0 && rounded != "0.00" {
        format!("-{rounded}")
    } else {
        rounded
    }
}

// Rounds a plain non-negative decimal string ("9.995") to two fraction
// digits, carrying into the integer digits when the tail rounds up.
fn round_decimal(repr: &str) -> String {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));

    let mut frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    let round_up = frac.len() > 2 && frac[2] >= 5;
    frac.resize(2, 0);

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    digits.extend_from_slice(&frac);

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 1);
    for &d in &digits[..split] {
        out.push(char::from(b'0' + d));
    }
    out.push('.');
    for &d in &digits[split..] {
        out.push(char::from(b'0' + d));
    }
    out
}
