// csvb_convert/types - Type reference conversion
use crate::error::ConvertError;
use crate::tokens::predefined_type_name;
use crate::Converter;
use csvb_ast::{TypeRef, TypeSegment};
use csvb_vb::{render_type, VbIdentifier, VbTypeRef};

impl<'a> Converter<'a> {
    pub(crate) fn convert_type(&self, cs_type: &TypeRef) -> Result<VbTypeRef, ConvertError> {
        match cs_type {
            TypeRef::Predefined(predefined, _) => {
                Ok(VbTypeRef::named(predefined_type_name(*predefined)))
            }
            TypeRef::Named { segments, span: _ } => self.convert_named_type(segments),
            TypeRef::Array { element, rank, .. } => Ok(VbTypeRef::Array {
                element: Box::new(self.convert_type(element)?),
                rank: *rank,
            }),
            TypeRef::Nullable { inner, .. } => Ok(VbTypeRef::Nullable {
                inner: Box::new(self.convert_type(inner)?),
            }),
            // Pointer semantics are dropped entirely; the pointee type
            // carries through.
            TypeRef::Pointer { inner, .. } => self.convert_type(inner),
            TypeRef::Tuple { elements, .. } => Ok(VbTypeRef::Tuple {
                elements: elements
                    .iter()
                    .map(|(_, element)| self.convert_type(element))
                    .collect::<Result<Vec<_>, _>>()?,
            }),
            TypeRef::Var(span) => Err(ConvertError::not_implemented(
                "an inferred `var` in a type-only position",
                Some(*span),
            )),
        }
    }

    /// Dotted names keep their dots; generic arguments on the final segment
    /// stay structural, earlier segments render their arguments inline.
    fn convert_named_type(&self, segments: &[TypeSegment]) -> Result<VbTypeRef, ConvertError> {
        let mut rendered = Vec::new();
        let (last, qualifiers) = segments.split_last().expect("non-empty type name");
        for segment in qualifiers {
            let name = VbIdentifier::new(self.options.rename(&segment.name.text)).render();
            if segment.type_args.is_empty() {
                rendered.push(name);
            } else {
                let inner = VbTypeRef::Named {
                    name,
                    type_args: segment
                        .type_args
                        .iter()
                        .map(|arg| self.convert_type(arg))
                        .collect::<Result<Vec<_>, _>>()?,
                };
                rendered.push(render_type(&inner));
            }
        }
        let last_name = VbIdentifier::new(self.options.rename(&last.name.text)).render();
        rendered.push(last_name);
        Ok(VbTypeRef::Named {
            name: rendered.join("."),
            type_args: last
                .type_args
                .iter()
                .map(|arg| self.convert_type(arg))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    /// Type for a declarator slot: `var` means "omit the As clause".
    pub(crate) fn convert_declared_type(
        &self,
        cs_type: &TypeRef,
    ) -> Result<Option<VbTypeRef>, ConvertError> {
        match cs_type {
            TypeRef::Var(_) => Ok(None),
            other => Ok(Some(self.convert_type(other)?)),
        }
    }
}
