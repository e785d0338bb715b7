use std::fmt;

use super::{Ast, BindingDirection, NodeId, NodeKind};

/// Display adapter behind [`Ast::dump`].
pub(super) struct Dump<'a>(pub(super) &'a Ast);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ast = self.0;
        let mut stack = vec![(ast.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            write!(f, "{:width$}", "", width = depth * 2)?;
            write_node(ast, id, f)?;
            writeln!(f)?;
            for &child in ast.children(id).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}

fn write_node(ast: &Ast, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let kind = ast.kind(id);
    f.write_str(kind.name())?;
    match kind {
        NodeKind::Document(doc) => {
            for decl in &doc.declarations {
                write!(f, " <!{}", decl.name)?;
                for param in &decl.parameters {
                    write!(f, " {param}")?;
                }
                f.write_str(">")?;
            }
        }
        NodeKind::Element(el) => {
            write!(f, " {}", el.name)?;
            for attr in &el.attributes {
                match &attr.value {
                    Some(v) => write!(f, " {}={v:?}", attr.name)?,
                    None => write!(f, " {}", attr.name)?,
                }
            }
            for b in &el.bindings {
                match b.direction {
                    BindingDirection::In => write!(f, " [{}]={:?}", b.name, b.expression)?,
                    BindingDirection::Out => write!(f, " ({})={:?}", b.name, b.expression)?,
                    BindingDirection::InOut => write!(f, " [({})]={:?}", b.name, b.expression)?,
                }
            }
            for d in &el.directives {
                match &d.expression {
                    Some(e) => write!(f, " *{}={e:?}", d.name)?,
                    None => write!(f, " *{}", d.name)?,
                }
            }
            if el.self_closing {
                f.write_str(" /")?;
            }
        }
        NodeKind::Text(text) | NodeKind::Comment(text) | NodeKind::Script(text) => {
            write!(f, " {text:?}")?;
        }
        NodeKind::Block => {}
        NodeKind::Foreach(each) => write!(
            f,
            " {} {} {} index={}",
            each.alias, each.method, each.collection, each.index
        )?,
        NodeKind::Interpolation(expr) => write!(f, " {expr}")?,
    }
    Ok(())
}
