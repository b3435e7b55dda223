//! SVG builder — accumulates SVG elements and produces the final string.

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    pub(super) elements: Vec<String>,
    width: f64,
    height: f64,
}

/// Attributes that make an element clickable by a host: an id to look the
/// hotspot up by, `data-*` payload, and a tooltip.
pub(super) struct Interactive<'a> {
    pub(super) id: &'a str,
    pub(super) data: &'a [(&'a str, String)],
    pub(super) title: &'a str,
}

impl Interactive<'_> {
    fn attrs(&self) -> String {
        let mut attrs = format!(r#" id="{}" cursor="pointer""#, escape(self.id));
        for (key, value) in self.data {
            attrs.push_str(&format!(r#" data-{}="{}""#, key, escape(value)));
        }
        attrs
    }

    fn title(&self) -> String {
        format!("<title>{}</title>", escape(self.title))
    }
}

/// Stroke and opacity for shapes that need more than a fill.
pub(super) struct Paint<'a> {
    pub(super) fill: &'a str,
    pub(super) stroke: &'a str,
    pub(super) stroke_width: f64,
    pub(super) opacity: f64,
}

impl Paint<'_> {
    fn attrs(&self) -> String {
        let mut attrs = format!(r#" fill="{}""#, self.fill);
        if self.stroke_width > 0.0 {
            attrs.push_str(&format!(
                r#" stroke="{}" stroke-width="{:.1}""#,
                self.stroke, self.stroke_width
            ));
        }
        if self.opacity < 1.0 {
            attrs.push_str(&format!(r#" opacity="{:.2}""#, self.opacity));
        }
        attrs
    }
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Helvetica', 'Arial', sans-serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.rounded_rect(x, y, w, h, 0.0, &Paint { fill, stroke, stroke_width, opacity: 1.0 }, None);
    }

    pub(super) fn rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        paint: &Paint,
        interactive: Option<&Interactive>,
    ) {
        let corners = if radius > 0.0 {
            format!(r#" rx="{:.1}" ry="{:.1}""#, radius, radius)
        } else {
            String::new()
        };
        let head = format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}"{}{}"#,
            x, y, w, h, corners, paint.attrs()
        );
        self.push_shape(head, "rect", interactive);
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
    }

    pub(super) fn painted_circle(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        paint: &Paint,
        interactive: Option<&Interactive>,
    ) {
        let head = format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}"{}"#,
            cx, cy, r, paint.attrs()
        );
        self.push_shape(head, "circle", interactive);
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.styled_text(x, y, content, size, weight, fill, anchor, None);
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn styled_text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        weight: &str,
        fill: &str,
        anchor: &str,
        font_style: Option<&str>,
    ) {
        let style = font_style
            .map(|s| format!(r#" font-style="{}""#, s))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}"{} pointer-events="none">{}</text>"#,
            x, y, size, weight, fill, anchor, style, escape(content)
        ));
    }

    fn push_shape(&mut self, head: String, tag: &str, interactive: Option<&Interactive>) {
        match interactive {
            Some(i) => self
                .elements
                .push(format!("{}{}>{}</{}>", head, i.attrs(), i.title(), tag)),
            None => self.elements.push(format!("{}/>", head)),
        }
    }
}

pub(super) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
