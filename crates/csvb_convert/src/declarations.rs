// csvb_convert/declarations - Member and compilation-unit conversion
use crate::context::ConvertContext;
use crate::error::ConvertError;
use crate::tokens::convert_identifier;
use crate::trivia::convert_trivia_list;
use crate::Converter;
use csvb_ast::*;
use csvb_vb::{
    constructor_chain_call, render_type, VbAccessor, VbAccessorKind, VbArgument, VbAttribute,
    VbCompilationUnit, VbDelegateDecl, VbEnumBlock, VbEnumMember, VbEventDecl, VbFieldDecl,
    VbIdentifier, VbImport, VbMember, VbMemberKind, VbMethodBlock, VbMethodKind, VbModifier,
    VbOperatorBlock, VbPropertyBlock, VbStatement, VbStatementKind, VbTypeBlock, VbTypeBlockKind,
    VbTypeParam, VbVariableDeclarator,
};

/// Whether modifier keywords sit on a type or on a member; several C#
/// modifiers convert differently per position (`abstract`, `sealed`).
#[derive(Clone, Copy, PartialEq)]
pub(crate) enum ModifierTarget {
    Type,
    Member,
}

impl<'a> Converter<'a> {
    pub(crate) fn convert_unit(
        &self,
        unit: &CompilationUnit,
    ) -> Result<VbCompilationUnit, ConvertError> {
        let mut converted = VbCompilationUnit::new();

        for extern_alias in &unit.externs {
            converted.imports.push(VbImport {
                name: extern_alias.name.text.clone(),
                leading_trivia: convert_trivia_list(&extern_alias.leading_trivia)?,
            });
        }
        for using in &unit.usings {
            converted.imports.push(self.convert_using_directive(using)?);
        }

        for list in &unit.attribute_lists {
            for attribute in &list.attributes {
                converted
                    .assembly_attributes
                    .push(self.convert_attribute(attribute)?);
            }
        }

        for member in &unit.members {
            let vb_member = self.convert_member(member, false, &mut converted.imports)?;
            converted.members.push(vb_member);
        }

        converted.trailing_trivia = convert_trivia_list(&unit.trailing_trivia)?;
        Ok(converted)
    }

    fn convert_using_directive(&self, using: &UsingDirective) -> Result<VbImport, ConvertError> {
        let target = render_type(&self.convert_type(&using.target)?);
        let name = match &using.alias {
            Some(alias) => format!("{} = {}", alias.text, target),
            None => target,
        };
        Ok(VbImport {
            name,
            leading_trivia: convert_trivia_list(&using.leading_trivia)?,
        })
    }

    pub(crate) fn convert_member(
        &self,
        member: &MemberDecl,
        in_module: bool,
        imports: &mut Vec<VbImport>,
    ) -> Result<VbMember, ConvertError> {
        let leading_trivia = convert_trivia_list(member.leading_trivia())?;
        let kind = match member {
            MemberDecl::Namespace(namespace) => {
                for using in &namespace.usings {
                    imports.push(self.convert_using_directive(using)?);
                }
                let mut members = Vec::new();
                for inner in &namespace.members {
                    members.push(self.convert_member(inner, false, imports)?);
                }
                let end_trivia = convert_trivia_list(&namespace.end_trivia)?;
                if !end_trivia.is_empty() {
                    members.push(
                        VbMember::new(VbMemberKind::Empty).with_leading_trivia(end_trivia),
                    );
                }
                VbMemberKind::Namespace {
                    name: namespace
                        .name
                        .iter()
                        .map(|segment| segment.text.clone())
                        .collect::<Vec<_>>()
                        .join("."),
                    members,
                }
            }
            MemberDecl::Type(type_decl) => self.convert_type_decl(type_decl, imports)?,
            MemberDecl::Enum(enum_decl) => VbMemberKind::Enum(self.convert_enum(enum_decl)?),
            MemberDecl::Delegate(delegate) => {
                VbMemberKind::Delegate(self.convert_delegate(delegate)?)
            }
            MemberDecl::Method(method) => {
                VbMemberKind::Method(self.convert_method(method, in_module)?)
            }
            MemberDecl::Constructor(constructor) => {
                VbMemberKind::Method(self.convert_constructor(constructor)?)
            }
            MemberDecl::Destructor(destructor) => {
                VbMemberKind::Method(self.convert_destructor(destructor)?)
            }
            MemberDecl::Property(property) => {
                VbMemberKind::Property(self.convert_property(property, in_module)?)
            }
            MemberDecl::Indexer(indexer) => {
                VbMemberKind::Property(self.convert_indexer(indexer, in_module)?)
            }
            MemberDecl::Field(field) => VbMemberKind::Field(self.convert_field(field, in_module)?),
            MemberDecl::Event(event) => VbMemberKind::Event(VbEventDecl {
                attributes: self.convert_attribute_lists(&event.attribute_lists, None)?,
                modifiers: self.convert_modifiers(
                    &event.modifiers,
                    ModifierTarget::Member,
                    in_module,
                ),
                name: convert_identifier(&event.name.text, false, self.options).into(),
                event_type: self.convert_type(&event.event_type)?,
            }),
            MemberDecl::Operator(operator) => {
                VbMemberKind::Operator(self.convert_operator(operator)?)
            }
            MemberDecl::ConversionOperator(conversion) => {
                VbMemberKind::Operator(self.convert_conversion_operator(conversion)?)
            }
        };
        Ok(VbMember::new(kind).with_leading_trivia(leading_trivia))
    }

    // -- types --------------------------------------------------------------

    fn convert_type_decl(
        &self,
        type_decl: &TypeDecl,
        imports: &mut Vec<VbImport>,
    ) -> Result<VbMemberKind, ConvertError> {
        // A static class has no instance side at all; it re-classifies as a
        // Module and the static modifier disappears with it.
        let is_static_class = type_decl.kind == TypeKind::Class
            && type_decl.modifiers.contains(&Modifier::Static);
        let kind = match type_decl.kind {
            TypeKind::Class if is_static_class => VbTypeBlockKind::Module,
            TypeKind::Class => VbTypeBlockKind::Class,
            TypeKind::Struct => VbTypeBlockKind::Structure,
            TypeKind::Interface => VbTypeBlockKind::Interface,
        };

        let mut modifiers = self.convert_modifiers(
            &type_decl.modifiers,
            ModifierTarget::Type,
            false,
        );
        if is_static_class {
            modifiers.retain(|modifier| *modifier != VbModifier::Shared);
        }

        let (inherits, implements) = self.split_base_list(type_decl)?;

        let mut members = Vec::new();
        for member in &type_decl.members {
            members.push(self.convert_member(member, is_static_class, imports)?);
        }
        let end_trivia = convert_trivia_list(&type_decl.end_trivia)?;
        if !end_trivia.is_empty() {
            members.push(VbMember::new(VbMemberKind::Empty).with_leading_trivia(end_trivia));
        }

        Ok(VbMemberKind::Type(VbTypeBlock {
            kind,
            attributes: self.convert_attribute_lists(&type_decl.attribute_lists, None)?,
            modifiers,
            name: convert_identifier(&type_decl.name.text, false, self.options).into(),
            type_params: self.convert_type_params(&type_decl.type_params, &type_decl.constraints)?,
            inherits,
            implements,
            members,
        }))
    }

    /// The base list does not syntactically distinguish a base class from
    /// implemented interfaces. Heuristic: the first entry is a base class
    /// unless its name looks like an interface (`I` + upper-case letter);
    /// interfaces inherit everything.
    fn split_base_list(
        &self,
        type_decl: &TypeDecl,
    ) -> Result<(Vec<csvb_vb::VbTypeRef>, Vec<csvb_vb::VbTypeRef>), ConvertError> {
        let converted = type_decl
            .base_list
            .iter()
            .map(|base| self.convert_type(base))
            .collect::<Result<Vec<_>, _>>()?;
        if type_decl.kind == TypeKind::Interface {
            return Ok((converted, vec![]));
        }
        let mut inherits = Vec::new();
        let mut implements = Vec::new();
        for (index, (base, converted_base)) in
            type_decl.base_list.iter().zip(converted).enumerate()
        {
            let interface_like = base
                .simple_name()
                .map(looks_like_interface)
                .unwrap_or(false);
            if index == 0 && !interface_like {
                inherits.push(converted_base);
            } else {
                implements.push(converted_base);
            }
        }
        Ok((inherits, implements))
    }

    fn convert_type_params(
        &self,
        type_params: &[Identifier],
        constraints: &[TypeParamConstraint],
    ) -> Result<Vec<VbTypeParam>, ConvertError> {
        type_params
            .iter()
            .map(|param| {
                let rendered_constraints = constraints
                    .iter()
                    .filter(|clause| clause.param.text == param.text)
                    .flat_map(|clause| clause.constraints.iter())
                    .map(|constraint| {
                        Ok(match constraint {
                            ConstraintKind::Type(ty) => render_type(&self.convert_type(ty)?),
                            ConstraintKind::Constructor => "New".to_string(),
                            ConstraintKind::Class => "Class".to_string(),
                            ConstraintKind::Struct => "Structure".to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, ConvertError>>()?;
                Ok(VbTypeParam {
                    name: convert_identifier(&param.text, false, self.options).into(),
                    constraints: rendered_constraints,
                })
            })
            .collect()
    }

    fn convert_enum(&self, enum_decl: &EnumDecl) -> Result<VbEnumBlock, ConvertError> {
        Ok(VbEnumBlock {
            attributes: self.convert_attribute_lists(&enum_decl.attribute_lists, None)?,
            modifiers: self.convert_modifiers(
                &enum_decl.modifiers,
                ModifierTarget::Type,
                false,
            ),
            name: convert_identifier(&enum_decl.name.text, false, self.options).into(),
            base_type: enum_decl
                .base_type
                .as_ref()
                .map(|base| self.convert_type(base))
                .transpose()?,
            members: enum_decl
                .members
                .iter()
                .map(|member| {
                    Ok(VbEnumMember {
                        leading_trivia: convert_trivia_list(&member.leading_trivia)?,
                        name: convert_identifier(&member.name.text, false, self.options)
                            .into(),
                        value: member
                            .value
                            .as_ref()
                            .map(|value| self.convert_expression(value))
                            .transpose()?,
                    })
                })
                .collect::<Result<Vec<_>, ConvertError>>()?,
        })
    }

    fn convert_delegate(&self, delegate: &DelegateDecl) -> Result<VbDelegateDecl, ConvertError> {
        let is_sub = is_void(&delegate.return_type);
        Ok(VbDelegateDecl {
            attributes: self.convert_attribute_lists(&delegate.attribute_lists, None)?,
            modifiers: self.convert_modifiers(
                &delegate.modifiers,
                ModifierTarget::Type,
                false,
            ),
            is_sub,
            name: convert_identifier(&delegate.name.text, false, self.options).into(),
            type_params: self.convert_type_params(&delegate.type_params, &[])?,
            params: delegate
                .params
                .iter()
                .map(|param| self.convert_parameter(param))
                .collect::<Result<Vec<_>, _>>()?,
            return_type: if is_sub {
                None
            } else {
                Some(self.convert_type(&delegate.return_type)?)
            },
        })
    }

    // -- callables ----------------------------------------------------------

    fn convert_method(
        &self,
        method: &MethodDecl,
        in_module: bool,
    ) -> Result<VbMethodBlock, ConvertError> {
        let is_sub = is_void(&method.return_type);
        let (mut attributes, return_attributes) =
            self.split_method_attributes(&method.attribute_lists)?;
        let mut modifiers =
            self.convert_modifiers(&method.modifiers, ModifierTarget::Member, in_module);

        // Extension methods express the receiver through an attribute, not
        // a modifier.
        if method.is_extension() {
            modifiers.retain(|modifier| *modifier != VbModifier::Shared);
            attributes.push(VbAttribute {
                name: "Extension".to_string(),
                args: vec![],
            });
        }

        let implements = method
            .explicit_interface
            .as_ref()
            .map(|interface| {
                Ok::<_, ConvertError>(format!(
                    "{}.{}",
                    render_type(&self.convert_type(interface)?),
                    method.name.text
                ))
            })
            .transpose()?;

        let body = self.convert_callable_body(
            method.body.as_ref(),
            method.expression_body.as_ref(),
            is_sub,
            None,
        )?;

        Ok(VbMethodBlock {
            kind: if is_sub {
                VbMethodKind::Sub
            } else {
                VbMethodKind::Function
            },
            attributes,
            modifiers,
            name: convert_identifier(&method.name.text, false, self.options).into(),
            type_params: self.convert_type_params(&method.type_params, &method.constraints)?,
            params: method
                .params
                .iter()
                .map(|param| self.convert_parameter(param))
                .collect::<Result<Vec<_>, _>>()?,
            return_type: if is_sub {
                None
            } else {
                Some(self.convert_type(&method.return_type)?)
            },
            return_attributes,
            implements,
            body,
        })
    }

    fn convert_constructor(
        &self,
        constructor: &ConstructorDecl,
    ) -> Result<VbMethodBlock, ConvertError> {
        // The chaining call is synthesized as the first body statement.
        let chain = constructor
            .initializer
            .as_ref()
            .map(|initializer| {
                let args = initializer
                    .args
                    .iter()
                    .map(|arg| Ok(VbArgument::positional(self.convert_expression(arg)?)))
                    .collect::<Result<Vec<_>, ConvertError>>()?;
                Ok::<_, ConvertError>(VbStatement::new(VbStatementKind::Expression(
                    constructor_chain_call(
                        initializer.kind == ConstructorInitializerKind::Base,
                        args,
                    ),
                )))
            })
            .transpose()?;

        let body = self.convert_callable_body(constructor.body.as_ref(), None, true, chain)?;

        Ok(VbMethodBlock {
            kind: VbMethodKind::Constructor,
            attributes: self.convert_attribute_lists(&constructor.attribute_lists, None)?,
            modifiers: self.convert_modifiers(
                &constructor.modifiers,
                ModifierTarget::Member,
                false,
            ),
            name: VbIdentifier::unescaped("New"),
            type_params: vec![],
            params: constructor
                .params
                .iter()
                .map(|param| self.convert_parameter(param))
                .collect::<Result<Vec<_>, _>>()?,
            return_type: None,
            return_attributes: vec![],
            implements: None,
            body,
        })
    }

    fn convert_destructor(
        &self,
        destructor: &DestructorDecl,
    ) -> Result<VbMethodBlock, ConvertError> {
        let body = self.convert_callable_body(destructor.body.as_ref(), None, true, None)?;
        Ok(VbMethodBlock {
            kind: VbMethodKind::Sub,
            attributes: self.convert_attribute_lists(&destructor.attribute_lists, None)?,
            modifiers: vec![VbModifier::Protected, VbModifier::Overrides],
            name: VbIdentifier::unescaped("Finalize"),
            type_params: vec![],
            params: vec![],
            return_type: None,
            return_attributes: vec![],
            implements: None,
            body: body.or(Some(vec![])),
        })
    }

    /// Block body, `=> expr` shorthand, or none (abstract/interface).
    fn convert_callable_body(
        &self,
        block: Option<&BlockStatement>,
        expression_body: Option<&Expression>,
        is_sub: bool,
        prefix: Option<VbStatement>,
    ) -> Result<Option<Vec<VbStatement>>, ConvertError> {
        let mut ctx = ConvertContext::new();
        let mut statements = match (block, expression_body) {
            (Some(block), _) => {
                let mut statements = Vec::new();
                for statement in &block.statements {
                    statements.extend(self.convert_statement(statement, &mut ctx)?);
                }
                statements
            }
            (None, Some(expr)) => {
                if is_sub {
                    self.convert_expression_statement(expr)?
                } else {
                    vec![VbStatement::new(VbStatementKind::Return(Some(
                        self.convert_expression(expr)?,
                    )))]
                }
            }
            (None, None) => return Ok(None),
        };
        if let Some(prefix) = prefix {
            statements.insert(0, prefix);
        }
        Ok(Some(statements))
    }

    fn convert_operator(&self, operator: &OperatorDecl) -> Result<VbOperatorBlock, ConvertError> {
        let body = self
            .convert_callable_body(
                operator.body.as_ref(),
                operator.expression_body.as_ref(),
                false,
                None,
            )?
            .unwrap_or_default();
        Ok(VbOperatorBlock {
            attributes: self.convert_attribute_lists(&operator.attribute_lists, None)?,
            modifiers: self.convert_modifiers(
                &operator.modifiers,
                ModifierTarget::Member,
                false,
            ),
            operator: operator_token(operator.operator).to_string(),
            params: operator
                .params
                .iter()
                .map(|param| self.convert_parameter(param))
                .collect::<Result<Vec<_>, _>>()?,
            return_type: Some(self.convert_type(&operator.return_type)?),
            body,
        })
    }

    fn convert_conversion_operator(
        &self,
        conversion: &ConversionOperatorDecl,
    ) -> Result<VbOperatorBlock, ConvertError> {
        let mut modifiers = self.convert_modifiers(
            &conversion.modifiers,
            ModifierTarget::Member,
            false,
        );
        modifiers.push(if conversion.implicit {
            VbModifier::Widening
        } else {
            VbModifier::Narrowing
        });
        let body = self
            .convert_callable_body(
                conversion.body.as_ref(),
                conversion.expression_body.as_ref(),
                false,
                None,
            )?
            .unwrap_or_default();
        Ok(VbOperatorBlock {
            attributes: self.convert_attribute_lists(&conversion.attribute_lists, None)?,
            modifiers,
            operator: "CType".to_string(),
            params: conversion
                .params
                .iter()
                .map(|param| self.convert_parameter(param))
                .collect::<Result<Vec<_>, _>>()?,
            return_type: Some(self.convert_type(&conversion.target_type)?),
            body,
        })
    }

    // -- properties and fields ----------------------------------------------

    fn convert_property(
        &self,
        property: &PropertyDecl,
        in_module: bool,
    ) -> Result<VbPropertyBlock, ConvertError> {
        let mut modifiers =
            self.convert_modifiers(&property.modifiers, ModifierTarget::Member, in_module);

        let has_get = property
            .accessors
            .iter()
            .any(|accessor| accessor.kind == AccessorKind::Get);
        let has_set = property
            .accessors
            .iter()
            .any(|accessor| accessor.kind == AccessorKind::Set);

        // Single-accessor properties need the access-direction modifier the
        // two-accessor form carries implicitly.
        if property.expression_body.is_some() || (has_get && !has_set) {
            modifiers.push(VbModifier::ReadOnly);
        } else if has_set && !has_get {
            modifiers.push(VbModifier::WriteOnly);
        }

        let accessors = if let Some(expr) = &property.expression_body {
            vec![VbAccessor {
                kind: VbAccessorKind::Get,
                modifiers: vec![],
                body: vec![VbStatement::new(VbStatementKind::Return(Some(
                    self.convert_expression(expr)?,
                )))],
            }]
        } else {
            self.convert_accessors(&property.accessors)?
        };

        let implements = property
            .explicit_interface
            .as_ref()
            .map(|interface| {
                Ok::<_, ConvertError>(format!(
                    "{}.{}",
                    render_type(&self.convert_type(interface)?),
                    property.name.text
                ))
            })
            .transpose()?;

        Ok(VbPropertyBlock {
            attributes: self.convert_attribute_lists(&property.attribute_lists, None)?,
            modifiers,
            is_default: false,
            name: convert_identifier(&property.name.text, false, self.options).into(),
            params: vec![],
            prop_type: Some(self.convert_type(&property.prop_type)?),
            implements,
            accessors,
            initializer: property
                .initializer
                .as_ref()
                .map(|init| self.convert_expression(init))
                .transpose()?,
        })
    }

    fn convert_indexer(
        &self,
        indexer: &IndexerDecl,
        in_module: bool,
    ) -> Result<VbPropertyBlock, ConvertError> {
        let mut modifiers =
            self.convert_modifiers(&indexer.modifiers, ModifierTarget::Member, in_module);
        let has_get = indexer
            .accessors
            .iter()
            .any(|accessor| accessor.kind == AccessorKind::Get);
        let has_set = indexer
            .accessors
            .iter()
            .any(|accessor| accessor.kind == AccessorKind::Set);
        if indexer.expression_body.is_some() || (has_get && !has_set) {
            modifiers.push(VbModifier::ReadOnly);
        } else if has_set && !has_get {
            modifiers.push(VbModifier::WriteOnly);
        }

        let accessors = if let Some(expr) = &indexer.expression_body {
            vec![VbAccessor {
                kind: VbAccessorKind::Get,
                modifiers: vec![],
                body: vec![VbStatement::new(VbStatementKind::Return(Some(
                    self.convert_expression(expr)?,
                )))],
            }]
        } else {
            self.convert_accessors(&indexer.accessors)?
        };

        Ok(VbPropertyBlock {
            attributes: self.convert_attribute_lists(&indexer.attribute_lists, None)?,
            modifiers,
            is_default: true,
            name: VbIdentifier::unescaped("Item"),
            params: indexer
                .params
                .iter()
                .map(|param| self.convert_parameter(param))
                .collect::<Result<Vec<_>, _>>()?,
            prop_type: Some(self.convert_type(&indexer.prop_type)?),
            implements: None,
            accessors,
            initializer: None,
        })
    }

    fn convert_accessors(
        &self,
        accessors: &[Accessor],
    ) -> Result<Vec<VbAccessor>, ConvertError> {
        // Auto-accessors produce no blocks at all.
        if accessors.iter().all(|accessor| accessor.body.is_none()) {
            return Ok(vec![]);
        }
        accessors
            .iter()
            .map(|accessor| {
                let mut ctx = ConvertContext::new();
                let body = match &accessor.body {
                    Some(block) => {
                        let mut statements = Vec::new();
                        for statement in &block.statements {
                            statements.extend(self.convert_statement(statement, &mut ctx)?);
                        }
                        statements
                    }
                    None => vec![],
                };
                Ok(VbAccessor {
                    kind: match accessor.kind {
                        AccessorKind::Get => VbAccessorKind::Get,
                        AccessorKind::Set => VbAccessorKind::Set,
                    },
                    modifiers: self.convert_modifiers(
                        &accessor.modifiers,
                        ModifierTarget::Member,
                        false,
                    ),
                    body,
                })
            })
            .collect()
    }

    fn convert_field(
        &self,
        field: &FieldDecl,
        in_module: bool,
    ) -> Result<VbFieldDecl, ConvertError> {
        let is_const = field.modifiers.contains(&Modifier::Const);
        let var_type = Some(self.convert_type(&field.field_type)?);
        Ok(VbFieldDecl {
            attributes: self.convert_attribute_lists(&field.attribute_lists, None)?,
            modifiers: self.convert_modifiers(&field.modifiers, ModifierTarget::Member, in_module),
            is_const,
            declarators: field
                .declarators
                .iter()
                .map(|declarator| {
                    Ok(VbVariableDeclarator {
                        name: convert_identifier(&declarator.name.text, false, self.options)
                            .into(),
                        var_type: var_type.clone(),
                        initializer: declarator
                            .initializer
                            .as_ref()
                            .map(|init| self.convert_expression(init))
                            .transpose()?,
                    })
                })
                .collect::<Result<Vec<_>, ConvertError>>()?,
        })
    }

    // -- shared pieces ------------------------------------------------------

    pub(crate) fn convert_modifiers(
        &self,
        modifiers: &[Modifier],
        target: ModifierTarget,
        in_module: bool,
    ) -> Vec<VbModifier> {
        let mut converted = Vec::new();
        for modifier in modifiers {
            let mapped = match modifier {
                Modifier::Public => Some(VbModifier::Public),
                Modifier::Private => Some(VbModifier::Private),
                Modifier::Protected => Some(VbModifier::Protected),
                Modifier::Internal => Some(VbModifier::Friend),
                // Module members are implicitly shared.
                Modifier::Static if in_module => None,
                Modifier::Static => Some(VbModifier::Shared),
                Modifier::Abstract if target == ModifierTarget::Type => {
                    Some(VbModifier::MustInherit)
                }
                Modifier::Abstract => Some(VbModifier::MustOverride),
                Modifier::Sealed if target == ModifierTarget::Type => {
                    Some(VbModifier::NotInheritable)
                }
                Modifier::Sealed => Some(VbModifier::NotOverridable),
                Modifier::Virtual => Some(VbModifier::Overridable),
                Modifier::Override => Some(VbModifier::Overrides),
                Modifier::Readonly => Some(VbModifier::ReadOnly),
                // `const` turns into the Const declaration form instead.
                Modifier::Const => None,
                Modifier::New => Some(VbModifier::Shadows),
                Modifier::Partial => Some(VbModifier::Partial),
                Modifier::Async => Some(VbModifier::Async),
                // No VB counterpart; the semantics are dropped with the
                // construct, not re-expressed.
                Modifier::Unsafe | Modifier::Extern | Modifier::Volatile => None,
            };
            if let Some(mapped) = mapped {
                if !converted.contains(&mapped) {
                    converted.push(mapped);
                }
            }
        }
        converted
    }

    fn convert_attribute_lists(
        &self,
        lists: &[AttributeList],
        only_target: Option<AttributeTarget>,
    ) -> Result<Vec<VbAttribute>, ConvertError> {
        let mut attributes = Vec::new();
        for list in lists {
            if list.target != only_target {
                continue;
            }
            for attribute in &list.attributes {
                attributes.push(self.convert_attribute(attribute)?);
            }
        }
        Ok(attributes)
    }

    /// Return-targeted attribute lists re-attach to the return-type clause.
    fn split_method_attributes(
        &self,
        lists: &[AttributeList],
    ) -> Result<(Vec<VbAttribute>, Vec<VbAttribute>), ConvertError> {
        let mut own = Vec::new();
        let mut returns = Vec::new();
        for list in lists {
            let bucket = if list.target == Some(AttributeTarget::Return) {
                &mut returns
            } else {
                &mut own
            };
            for attribute in &list.attributes {
                bucket.push(self.convert_attribute(attribute)?);
            }
        }
        Ok((own, returns))
    }

    fn convert_attribute(&self, attribute: &Attribute) -> Result<VbAttribute, ConvertError> {
        Ok(VbAttribute {
            name: render_type(&self.convert_type(&attribute.name)?),
            args: attribute
                .args
                .iter()
                .map(|arg| self.convert_expression(arg))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// `I` followed by another upper-case letter reads as an interface name.
fn looks_like_interface(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('I')
        && chars
            .next()
            .map(|second| second.is_ascii_uppercase())
            .unwrap_or(false)
}

fn is_void(cs_type: &TypeRef) -> bool {
    matches!(cs_type, TypeRef::Predefined(PredefinedType::Void, _))
}

/// The operator-symbol table, including the named pseudo-operators for
/// increment and decrement, which VB cannot overload directly.
fn operator_token(kind: OperatorKind) -> &'static str {
    match kind {
        OperatorKind::Plus => "+",
        OperatorKind::Minus => "-",
        OperatorKind::Star => "*",
        OperatorKind::Slash => "/",
        OperatorKind::Percent => "Mod",
        OperatorKind::Amp => "And",
        OperatorKind::Pipe => "Or",
        OperatorKind::Caret => "Xor",
        OperatorKind::Tilde => "Not",
        OperatorKind::Bang => "Not",
        OperatorKind::EqualEqual => "=",
        OperatorKind::BangEqual => "<>",
        OperatorKind::Less => "<",
        OperatorKind::Greater => ">",
        OperatorKind::LessEqual => "<=",
        OperatorKind::GreaterEqual => ">=",
        OperatorKind::ShiftLeft => "<<",
        OperatorKind::ShiftRight => ">>",
        OperatorKind::True => "IsTrue",
        OperatorKind::False => "IsFalse",
        OperatorKind::Increment => "op_Increment",
        OperatorKind::Decrement => "op_Decrement",
    }
}
