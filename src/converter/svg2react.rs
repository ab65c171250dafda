use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Kebab-case SVG presentation attributes and their JSX counterparts.
const ATTRIBUTE_RENAMES: [(&str, &str); 15] = [
    ("class=", "className="),
    ("stroke-width=", "strokeWidth="),
    ("stroke-linecap=", "strokeLinecap="),
    ("stroke-linejoin=", "strokeLinejoin="),
    ("fill-rule=", "fillRule="),
    ("clip-rule=", "clipRule="),
    ("stroke-dasharray=", "strokeDasharray="),
    ("stroke-dashoffset=", "strokeDashoffset="),
    ("font-family=", "fontFamily="),
    ("font-size=", "fontSize="),
    ("text-anchor=", "textAnchor="),
    ("stop-color=", "stopColor="),
    ("stop-opacity=", "stopOpacity="),
    ("fill-opacity=", "fillOpacity="),
    ("stroke-opacity=", "strokeOpacity="),
];

static SVG_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<svg([^>]*)>").unwrap());
static WIDTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"width="[^"]*""#).unwrap());
static HEIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"height="[^"]*""#).unwrap());
static CLASS_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"className="[^"]*""#).unwrap());

/// Generates a typed React function component from SVG markup.
///
/// Presentation attributes are renamed to their JSX spellings, and the
/// root element's `width`, `height`, and `className` become prop bindings.
pub fn generate(svg: &str, component_name: &str) -> Result<String, ConvertError> {
    let trimmed = svg.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }
    if !trimmed.to_lowercase().contains("<svg") {
        return Err(ConvertError::precondition("Input is not valid SVG markup"));
    }

    let name = if component_name.trim().is_empty() {
        "SvgIcon"
    } else {
        component_name.trim()
    };

    let mut jsx = svg.to_string();
    for (from, to) in ATTRIBUTE_RENAMES {
        jsx = jsx.replace(from, to);
    }

    // Bind the root element's dimensions and class to props.
    let jsx = SVG_OPEN_RE.replace(&jsx, |caps: &Captures| {
        let attributes = WIDTH_RE.replace(&caps[1], "width={width}");
        let attributes = HEIGHT_RE.replace(&attributes, "height={height}");
        let attributes = CLASS_NAME_RE.replace(&attributes, "className={className}");
        format!("<svg{}>", attributes)
    });

    Ok(format!(
        "import {{ forwardRef, SVGProps }} from 'react';

interface {name}Props {{
  className?: string;
  width?: number | string;
  height?: number | string;
}}

const {name} = forwardRef<SVGSVGElement, {name}Props>((props, ref) => {{
  const {{ className, width, height, ...rest }} = props;
  return (
    {jsx}
  );
}});

{name}.displayName = '{name}';

export default {name};"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<svg width="24" height="24" class="icon" viewBox="0 0 24 24"><path stroke-width="2" stroke-linecap="round" d="M4 6h16"/></svg>"#;

    #[test]
    fn renames_presentation_attributes() {
        let component = generate(SAMPLE, "ArrowIcon").unwrap();
        assert!(component.contains("strokeWidth=\"2\""));
        assert!(component.contains("strokeLinecap=\"round\""));
        assert!(!component.contains("stroke-width"));
    }

    #[test]
    fn binds_root_attributes_to_props() {
        let component = generate(SAMPLE, "ArrowIcon").unwrap();
        assert!(component.contains("width={width}"));
        assert!(component.contains("height={height}"));
        assert!(component.contains("className={className}"));
    }

    #[test]
    fn wraps_in_forward_ref_component() {
        let component = generate(SAMPLE, "ArrowIcon").unwrap();
        assert!(component.contains("const ArrowIcon = forwardRef<SVGSVGElement, ArrowIconProps>"));
        assert!(component.contains("ArrowIcon.displayName = 'ArrowIcon';"));
        assert!(component.contains("export default ArrowIcon;"));
    }

    #[test]
    fn falls_back_to_default_component_name() {
        let component = generate(SAMPLE, "").unwrap();
        assert!(component.contains("const SvgIcon"));
    }

    #[test]
    fn nested_dimension_attributes_are_untouched() {
        let svg = r#"<svg width="24"><rect width="10" height="5"/></svg>"#;
        let component = generate(svg, "Box").unwrap();
        assert!(component.contains("<svg width={width}>"));
        assert!(component.contains(r#"<rect width="10" height="5"/>"#));
    }

    #[test]
    fn rejects_non_svg_input() {
        assert!(generate("<div>hi</div>", "X").unwrap_err().is_precondition());
        assert!(generate("  ", "X").unwrap_err().is_precondition());
    }
}
