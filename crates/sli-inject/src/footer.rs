use sli_core::{Order, SliSettings};

use crate::tracker::conversion_tracker;

/// Full footer fragment: autocomplete config loader first, conversion
/// tracker second. Either half degrades to the empty string on its own.
pub fn footer(settings: &SliSettings, order: Option<&Order>) -> String {
    let mut out = rac_footer(settings);
    out.push_str(&conversion_tracker(settings, order));
    out
}

/// Rich autocomplete config loader, destined for the end of the body.
pub fn rac_footer(settings: &SliSettings) -> String {
    if !settings.rac {
        return String::new();
    }

    format!(
        r#"<script language="javascript" type="text/javascript">
var sliJsHost = (("https:" == document.location.protocol) ? "https://" : "http://");
document.write(unescape('%3Cscript src="' + sliJsHost + '{client_name}.resultspage.com/rac/sli-rac.config.js?rev={rac_revision}" type="text/javascript"%3E%3C/script%3E'));
</script>"#,
        client_name = settings.client_name,
        rac_revision = settings.rac_revision,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sli_core::{OrderLineItem, TotalKind, TotalLine};

    fn rac_settings() -> SliSettings {
        SliSettings {
            client_name: "acme".to_string(),
            rac_revision: "3".to_string(),
            rac: true,
            ..SliSettings::default()
        }
    }

    fn confirmed_order() -> Order {
        Order {
            id: "1001".to_string(),
            account_id: "7".to_string(),
            items: vec![OrderLineItem {
                product_id: "55".to_string(),
                model: "A1".to_string(),
                name: "Widget".to_string(),
                unit_price: 9.99,
                quantity: 1,
            }],
            totals: vec![TotalLine {
                kind: TotalKind::Total,
                amount: 9.99,
            }],
        }
    }

    #[test]
    fn disabled_autocomplete_yields_empty_config_loader() {
        assert_eq!(rac_footer(&SliSettings::default()), "");
    }

    #[test]
    fn config_loader_references_client_config_script() {
        let footer = rac_footer(&rac_settings());
        assert!(footer.contains("acme.resultspage.com/rac/sli-rac.config.js?rev=3"));
    }

    #[test]
    fn footer_places_config_loader_before_tracker() {
        let settings = SliSettings {
            client_id: "client-1".to_string(),
            conversion_tracker: true,
            ..rac_settings()
        };
        let order = confirmed_order();
        let footer = footer(&settings, Some(&order));

        let loader_at = footer.find("sli-rac.config.js").expect("config loader");
        let tracker_at = footer.find("sli-spark.js").expect("tracker");
        assert!(loader_at < tracker_at);
    }

    #[test]
    fn footer_without_either_feature_is_empty() {
        assert_eq!(footer(&SliSettings::default(), None), "");
    }

    #[test]
    fn tracker_half_still_emitted_when_autocomplete_is_off() {
        let settings = SliSettings {
            client_id: "client-1".to_string(),
            conversion_tracker: true,
            ..SliSettings::default()
        };
        let order = confirmed_order();
        let footer = footer(&settings, Some(&order));
        assert!(!footer.contains("sli-rac.config.js"));
        assert!(footer.contains("sli-spark.js"));
    }
}
