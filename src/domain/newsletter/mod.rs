mod font_family;
mod footer;
mod header;
mod image_source;
mod layer;
mod requests;
mod styled_text;
mod subject;
mod subscription;

pub use font_family::FontFamily;
pub use footer::{
    FooterAlignment, FooterConfig, FooterImage, ImagePlacement, SocialConfig, SocialLink,
    SocialMode,
};
pub use header::HeaderConfig;
pub use image_source::{EmbeddedImage, ImageSource};
pub use layer::{ImageAlignment, Layer, LayerImage};
pub use requests::*;
pub use styled_text::{StyledText, TextStyle};
pub use subject::Subject;
pub use subscription::SubscriptionConfig;

/// A complete, immutable description of one newsletter. Constructed fresh per
/// generation request; the engine never mutates or persists it.
#[derive(Debug, Clone)]
pub struct NewsletterDocument {
    pub subject: Subject,
    pub background_color: String,
    pub text_color: String,
    pub max_width_px: u32,
    pub font_family: FontFamily,
    pub header: HeaderConfig,
    pub layers: Vec<Layer>,
    pub footer: FooterConfig,
    pub subscription: Option<SubscriptionConfig>,
}

impl NewsletterDocument {
    /// Rejects duplicate layer `order` values. The assembler itself has no
    /// opinion about uniqueness and renders whatever list it is handed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        subject: Subject,
        background_color: String,
        text_color: String,
        max_width_px: u32,
        font_family: FontFamily,
        header: HeaderConfig,
        layers: Vec<Layer>,
        footer: FooterConfig,
        subscription: Option<SubscriptionConfig>,
    ) -> Result<Self, String> {
        let mut seen = std::collections::HashSet::new();
        for layer in &layers {
            if !seen.insert(layer.order) {
                return Err(format!(
                    "Invalid layers: duplicate order value {}.",
                    layer.order
                ));
            }
        }

        Ok(Self {
            subject,
            background_color,
            text_color,
            max_width_px,
            font_family,
            header,
            layers,
            footer,
            subscription,
        })
    }

    /// Layers in ascending `order`. The sort is stable, so if uniqueness was
    /// bypassed, ties keep their original list position.
    pub fn ordered_layers(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.layers.iter().collect();
        layers.sort_by_key(|layer| layer.order);
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    fn bare_layer(order: i32) -> Layer {
        Layer {
            order,
            heading_h2: None,
            heading_h3: None,
            heading_h4: None,
            body: format!("Layer {order}"),
            image: None,
            link_url: None,
            padding_px: 30,
        }
    }

    fn document_with_layers(layers: Vec<Layer>) -> Result<NewsletterDocument, String> {
        NewsletterDocument::new(
            Subject::parse("Weekly Update".into())?,
            "#FFFFFF".into(),
            "#333333".into(),
            1000,
            FontFamily::Arial,
            HeaderConfig::default(),
            layers,
            FooterConfig::default(),
            None,
        )
    }

    #[test]
    fn duplicate_layer_orders_are_rejected() {
        let result = document_with_layers(vec![bare_layer(1), bare_layer(2), bare_layer(1)]);
        assert_err!(result);
    }

    #[test]
    fn distinct_layer_orders_are_accepted() {
        let result = document_with_layers(vec![bare_layer(3), bare_layer(1), bare_layer(2)]);
        assert_ok!(result);
    }

    #[test]
    fn ordered_layers_sorts_ascending() {
        let document =
            document_with_layers(vec![bare_layer(5), bare_layer(1), bare_layer(3)]).unwrap();
        let orders: Vec<i32> = document.ordered_layers().iter().map(|l| l.order).collect();
        assert_eq!(orders, vec![1, 3, 5]);
    }
}
