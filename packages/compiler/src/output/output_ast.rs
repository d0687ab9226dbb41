//! Output AST Module
//!
//! Defines the expression and statement tree that is rendered to JavaScript
//! source text. Nodes are plain owned values; the append-style builders
//! mutate in place or consume and return the node for fluent composition.

use crate::error::{CompilerError, Result};
use crate::output::coercion;
use crate::output::js_emitter::JsGenerator;
use crate::output::value::{Number, Value};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Parameter lists are short; keep them inline.
pub type ParamList = SmallVec<[Identifier; 4]>;

///// Expressions

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Raw(RawExpr),
    Template(TemplateExpr),
    Call(CallExpr),
    CallChain(CallChainExpr),
    Assignment(AssignmentExpr),
    Fn(FunctionExpr),
    NamedFn(NamedFunctionExpr),
}

/// A bare lexical name. Compares equal to a string holding the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CompilerError::EmptyIdentifier);
        }
        Ok(Identifier { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl PartialEq<String> for Identifier {
    fn eq(&self, other: &String) -> bool {
        &self.name == other
    }
}

impl PartialEq<Identifier> for str {
    fn eq(&self, other: &Identifier) -> bool {
        self == other.name
    }
}

impl PartialEq<Identifier> for &str {
    fn eq(&self, other: &Identifier) -> bool {
        *self == other.name
    }
}

impl TryFrom<&str> for Identifier {
    type Error = CompilerError;

    fn try_from(name: &str) -> Result<Self> {
        Identifier::new(name)
    }
}

impl TryFrom<String> for Identifier {
    type Error = CompilerError;

    fn try_from(name: String) -> Result<Self> {
        Identifier::new(name)
    }
}

/// A host value wrapped as a literal. Equality and hashing delegate to the
/// wrapped value.
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum Literal {
    Number(Number),
    Boolean(bool),
    String(String),
    Array(Vec<Value>),
    Object(Value),
    Null,
}

pub static TRUE: Literal = Literal::Boolean(true);
pub static FALSE: Literal = Literal::Boolean(false);
pub static NULL_LITERAL: Literal = Literal::Null;

impl Literal {
    /// Returns the interned boolean literal.
    pub fn of_bool(value: bool) -> &'static Literal {
        if value {
            &TRUE
        } else {
            &FALSE
        }
    }

    pub fn number(value: impl Into<Number>) -> Literal {
        Literal::Number(value.into())
    }

    pub fn string(value: impl Into<String>) -> Literal {
        Literal::String(value.into())
    }

    /// Elements are kept as host values; the serializer encodes them.
    pub fn array<I>(values: I) -> Literal
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Literal::Array(values.into_iter().map(Into::into).collect())
    }

    pub fn object(value: impl Into<Value>) -> Literal {
        Literal::Object(value.into())
    }

    /// The wrapped host value.
    pub fn value(&self) -> Value {
        match self {
            Literal::Number(n) => Value::Number(*n),
            Literal::Boolean(b) => Value::Bool(*b),
            Literal::String(s) => Value::String(s.clone()),
            Literal::Array(items) => Value::Array(items.clone()),
            Literal::Object(value) => value.clone(),
            Literal::Null => Value::Null,
        }
    }
}

/// Already-valid JavaScript text inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawExpr {
    pub code: Cow<'static, str>,
}

/// The `null` keyword.
pub static NULL: RawExpr = RawExpr::from_static("null");

/// The `this` keyword.
pub static THIS: RawExpr = RawExpr::from_static("this");

impl RawExpr {
    pub fn new(code: impl Into<String>) -> Self {
        RawExpr {
            code: Cow::Owned(code.into()),
        }
    }

    pub const fn from_static(code: &'static str) -> Self {
        RawExpr {
            code: Cow::Borrowed(code),
        }
    }
}

/// Script text with `${name}` placeholders filled from bound variables.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExpr {
    pub template: String,
    pub variables: IndexMap<String, Value>,
}

impl TemplateExpr {
    pub fn new(template: impl Into<String>) -> Self {
        TemplateExpr {
            template: template.into(),
            variables: IndexMap::new(),
        }
    }

    pub fn var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_variable(name, value);
        self
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    pub args: Vec<Expression>,
}

impl CallExpr {
    pub fn new(callee: impl Into<Expression>, args: Vec<Expression>) -> Self {
        CallExpr {
            callee: Box::new(callee.into()),
            args,
        }
    }

    /// A call of the function with the given name and no arguments.
    pub fn named(function: impl Into<String>) -> Result<Self> {
        Ok(CallExpr::new(Identifier::new(function)?, Vec::new()))
    }

    /// A call whose arguments are coerced from host values, in order.
    pub fn with_values<I>(function: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Ok(CallExpr::new(
            Identifier::new(function)?,
            coercion::as_argument_list(values),
        ))
    }

    pub fn arg(mut self, argument: impl Into<Value>) -> Self {
        self.add_argument(argument);
        self
    }

    pub fn add_argument(&mut self, argument: impl Into<Value>) -> &mut Self {
        self.args.push(coercion::as_expression(argument));
        self
    }
}

/// Links rendered in order and joined by the member-access operator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallChainExpr {
    pub links: Vec<Expression>,
}

impl CallChainExpr {
    pub fn new() -> Self {
        CallChainExpr::default()
    }

    pub fn from_links(links: Vec<Expression>) -> Self {
        CallChainExpr { links }
    }

    pub fn chain(mut self, link: impl Into<Expression>) -> Self {
        self.push(link);
        self
    }

    pub fn chain_all<I>(mut self, links: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        self.links.extend(links.into_iter().map(Into::into));
        self
    }

    /// Appends a bare name as an identifier link.
    pub fn chain_name(mut self, name: impl Into<String>) -> Result<Self> {
        self.push_name(name)?;
        Ok(self)
    }

    /// Appends a call of `function` with coerced arguments.
    pub fn call(mut self, function: impl Into<String>, arguments: Vec<Value>) -> Result<Self> {
        self.push_call(function, arguments)?;
        Ok(self)
    }

    pub fn push(&mut self, link: impl Into<Expression>) -> &mut Self {
        self.links.push(link.into());
        self
    }

    pub fn push_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let identifier = Identifier::new(name)?;
        Ok(self.push(identifier))
    }

    pub fn push_call(
        &mut self,
        function: impl Into<String>,
        arguments: Vec<Value>,
    ) -> Result<&mut Self> {
        let call = CallExpr::with_values(function, arguments)?;
        Ok(self.push(call))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl AssignmentExpr {
    pub fn new(left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        AssignmentExpr {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// Assigns a coerced host value to the named variable.
    pub fn variable(name: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Ok(AssignmentExpr::new(
            Identifier::new(name)?,
            coercion::as_expression(value),
        ))
    }
}

/// An anonymous function. The body is always a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub params: ParamList,
    pub body: Box<Statement>,
}

impl FunctionExpr {
    pub fn new(body: impl Into<JavaScript>) -> Self {
        FunctionExpr::with_params(ParamList::new(), body)
    }

    pub fn with_params<I>(params: I, body: impl Into<JavaScript>) -> Self
    where
        I: IntoIterator<Item = Identifier>,
    {
        FunctionExpr {
            params: params.into_iter().collect(),
            body: Box::new(Statement::of(body)),
        }
    }

    pub fn param(mut self, name: impl Into<String>) -> Result<Self> {
        self.add_parameter(Identifier::new(name)?);
        Ok(self)
    }

    pub fn add_parameter(&mut self, parameter: Identifier) -> &mut Self {
        self.params.push(parameter);
        self
    }

    /// Appends the parameter unless one with the same name is declared.
    pub fn ensure_parameter(&mut self, parameter: Identifier) -> &mut Self {
        if !self.has_parameter(parameter.name()) {
            self.params.push(parameter);
        }
        self
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedFunctionExpr {
    pub name: Identifier,
    pub function: FunctionExpr,
}

impl NamedFunctionExpr {
    pub fn new(name: Identifier, function: FunctionExpr) -> Self {
        NamedFunctionExpr { name, function }
    }

    pub fn param(mut self, name: impl Into<String>) -> Result<Self> {
        self.function.add_parameter(Identifier::new(name)?);
        Ok(self)
    }

    pub fn add_parameter(&mut self, parameter: Identifier) -> &mut Self {
        self.function.add_parameter(parameter);
        self
    }

    pub fn ensure_parameter(&mut self, parameter: Identifier) -> &mut Self {
        self.function.ensure_parameter(parameter);
        self
    }
}

pub trait ExpressionVisitor<C> {
    fn visit_identifier(&mut self, expr: &Identifier, context: &mut C) -> Result<()>;
    fn visit_literal(&mut self, expr: &Literal, context: &mut C) -> Result<()>;
    fn visit_raw_expr(&mut self, expr: &RawExpr, context: &mut C) -> Result<()>;
    fn visit_template_expr(&mut self, expr: &TemplateExpr, context: &mut C) -> Result<()>;
    fn visit_call_expr(&mut self, expr: &CallExpr, context: &mut C) -> Result<()>;
    fn visit_call_chain_expr(&mut self, expr: &CallChainExpr, context: &mut C) -> Result<()>;
    fn visit_assignment_expr(&mut self, expr: &AssignmentExpr, context: &mut C) -> Result<()>;
    fn visit_function_expr(&mut self, expr: &FunctionExpr, context: &mut C) -> Result<()>;
    fn visit_named_function_expr(
        &mut self,
        expr: &NamedFunctionExpr,
        context: &mut C,
    ) -> Result<()>;
}

impl Expression {
    pub fn visit_expression<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: ExpressionVisitor<C> + ?Sized,
    {
        match self {
            Expression::Identifier(e) => visitor.visit_identifier(e, context),
            Expression::Literal(e) => visitor.visit_literal(e, context),
            Expression::Raw(e) => visitor.visit_raw_expr(e, context),
            Expression::Template(e) => visitor.visit_template_expr(e, context),
            Expression::Call(e) => visitor.visit_call_expr(e, context),
            Expression::CallChain(e) => visitor.visit_call_chain_expr(e, context),
            Expression::Assignment(e) => visitor.visit_assignment_expr(e, context),
            Expression::Fn(e) => visitor.visit_function_expr(e, context),
            Expression::NamedFn(e) => visitor.visit_named_function_expr(e, context),
        }
    }

    /// Wraps the expression as a terminated statement.
    pub fn terminate(self) -> Statement {
        Statement::Expression(ExpressionStatement::new(self))
    }

    /// Renders the expression with a fresh generator.
    pub fn to_js(&self) -> Result<String> {
        JsGenerator::new(self).generate().map(str::to_string)
    }
}

///// Statements

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Raw(RawStmt),
    Expression(ExpressionStatement),
    Sequence(StatementSequence),
    If(IfStmt),
    DeclareVar(DeclareVarStmt),
    Return(ReturnStatement),
}

/// Verbatim statement text; the terminator is appended on render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawStmt {
    pub code: String,
}

impl RawStmt {
    pub fn new(code: impl Into<String>) -> Self {
        RawStmt { code: code.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expr: Box<Expression>,
}

impl ExpressionStatement {
    pub fn new(expr: impl Into<Expression>) -> Self {
        ExpressionStatement {
            expr: Box::new(expr.into()),
        }
    }
}

/// Statements rendered back-to-back, each with its own terminator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatementSequence {
    pub statements: Vec<Statement>,
}

impl StatementSequence {
    pub fn new() -> Self {
        StatementSequence::default()
    }

    /// Expressions among `scripts` are terminated before they are stored.
    pub fn of<I>(scripts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<JavaScript>,
    {
        StatementSequence {
            statements: coercion::as_statement_list(scripts),
        }
    }

    pub fn then(mut self, script: impl Into<JavaScript>) -> Self {
        self.add(script);
        self
    }

    pub fn add(&mut self, script: impl Into<JavaScript>) -> &mut Self {
        self.statements.push(Statement::of(script));
        self
    }

    /// Appends raw statement text.
    pub fn add_raw(&mut self, code: impl Into<String>) -> &mut Self {
        self.statements.push(Statement::Raw(RawStmt::new(code)));
        self
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Box<Expression>,
    pub true_case: Box<Statement>,
    pub false_case: Option<Box<Statement>>,
    /// Render the condition wrapped in a boolean negation.
    pub negated: bool,
}

impl IfStmt {
    pub fn new(condition: impl Into<Expression>, true_case: impl Into<JavaScript>) -> Self {
        IfStmt {
            condition: Box::new(condition.into()),
            true_case: Box::new(Statement::of(true_case)),
            false_case: None,
            negated: false,
        }
    }

    pub fn with_else(
        condition: impl Into<Expression>,
        true_case: impl Into<JavaScript>,
        false_case: impl Into<JavaScript>,
    ) -> Self {
        IfStmt::new(condition, true_case).otherwise(false_case)
    }

    pub fn if_not(condition: impl Into<Expression>, true_case: impl Into<JavaScript>) -> Self {
        IfStmt::new(condition, true_case).negate()
    }

    pub fn if_not_else(
        condition: impl Into<Expression>,
        true_case: impl Into<JavaScript>,
        false_case: impl Into<JavaScript>,
    ) -> Self {
        IfStmt::with_else(condition, true_case, false_case).negate()
    }

    pub fn otherwise(mut self, false_case: impl Into<JavaScript>) -> Self {
        self.false_case = Some(Box::new(Statement::of(false_case)));
        self
    }

    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclareVarStmt {
    pub name: Identifier,
    pub value: Option<Box<Expression>>,
}

impl DeclareVarStmt {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(DeclareVarStmt {
            name: Identifier::new(name)?,
            value: None,
        })
    }

    /// Declares the variable initialized with a coerced host value.
    pub fn with_value(name: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        Ok(DeclareVarStmt {
            name: Identifier::new(name)?,
            value: Some(Box::new(coercion::as_expression(value))),
        })
    }

    pub fn with_expression(name: Identifier, value: impl Into<Expression>) -> Self {
        DeclareVarStmt {
            name,
            value: Some(Box::new(value.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReturnStatement {
    pub value: Option<Box<Expression>>,
}

impl ReturnStatement {
    pub fn void() -> Self {
        ReturnStatement { value: None }
    }

    pub fn new(value: impl Into<Value>) -> Self {
        ReturnStatement {
            value: Some(Box::new(coercion::as_expression(value))),
        }
    }

    pub fn is_void(&self) -> bool {
        self.value.is_none()
    }
}

pub trait StatementVisitor<C> {
    fn visit_raw_stmt(&mut self, stmt: &RawStmt, context: &mut C) -> Result<()>;
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStatement, context: &mut C)
        -> Result<()>;
    fn visit_statement_sequence(&mut self, stmt: &StatementSequence, context: &mut C)
        -> Result<()>;
    fn visit_if_stmt(&mut self, stmt: &IfStmt, context: &mut C) -> Result<()>;
    fn visit_declare_var_stmt(&mut self, stmt: &DeclareVarStmt, context: &mut C) -> Result<()>;
    fn visit_return_stmt(&mut self, stmt: &ReturnStatement, context: &mut C) -> Result<()>;
}

impl Statement {
    pub fn visit_statement<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: StatementVisitor<C> + ?Sized,
    {
        match self {
            Statement::Raw(s) => visitor.visit_raw_stmt(s, context),
            Statement::Expression(s) => visitor.visit_expression_stmt(s, context),
            Statement::Sequence(s) => visitor.visit_statement_sequence(s, context),
            Statement::If(s) => visitor.visit_if_stmt(s, context),
            Statement::DeclareVar(s) => visitor.visit_declare_var_stmt(s, context),
            Statement::Return(s) => visitor.visit_return_stmt(s, context),
        }
    }

    /// Converts a tree node to a statement: expressions are terminated,
    /// statements are returned unchanged.
    pub fn of(script: impl Into<JavaScript>) -> Statement {
        match script.into() {
            JavaScript::Statement(stmt) => stmt,
            JavaScript::Expression(expr) => expr.terminate(),
        }
    }

    /// Chains another node after this statement.
    pub fn then(self, script: impl Into<JavaScript>) -> StatementSequence {
        match self {
            Statement::Sequence(seq) => seq.then(script),
            stmt => StatementSequence::new().then(stmt).then(script),
        }
    }

    pub fn to_js(&self) -> Result<String> {
        JsGenerator::new(self).generate().map(str::to_string)
    }
}

///// Either kind of node

/// A tree root: either an expression or a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum JavaScript {
    Expression(Expression),
    Statement(Statement),
}

impl JavaScript {
    pub fn visit<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: ExpressionVisitor<C> + StatementVisitor<C> + ?Sized,
    {
        match self {
            JavaScript::Expression(expr) => expr.visit_expression(visitor, context),
            JavaScript::Statement(stmt) => stmt.visit_statement(visitor, context),
        }
    }

    pub fn to_js(&self) -> Result<String> {
        JsGenerator::new(self).generate().map(str::to_string)
    }
}

/// Anything the emitter can walk: used by the joiner to render homogeneous
/// lists of expressions, statements, parameters or mixed roots.
pub trait JsNode {
    fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: ExpressionVisitor<C> + StatementVisitor<C> + ?Sized;
}

impl JsNode for Expression {
    fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: ExpressionVisitor<C> + StatementVisitor<C> + ?Sized,
    {
        self.visit_expression(visitor, context)
    }
}

impl JsNode for Statement {
    fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: ExpressionVisitor<C> + StatementVisitor<C> + ?Sized,
    {
        self.visit_statement(visitor, context)
    }
}

impl JsNode for JavaScript {
    fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: ExpressionVisitor<C> + StatementVisitor<C> + ?Sized,
    {
        self.visit(visitor, context)
    }
}

impl JsNode for Identifier {
    fn accept<C, V>(&self, visitor: &mut V, context: &mut C) -> Result<()>
    where
        V: ExpressionVisitor<C> + StatementVisitor<C> + ?Sized,
    {
        visitor.visit_identifier(self, context)
    }
}

// Conversions into the node enums

macro_rules! expression_from {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(
            impl From<$t> for Expression {
                fn from(e: $t) -> Self {
                    Expression::$variant(e)
                }
            }

            impl From<$t> for JavaScript {
                fn from(e: $t) -> Self {
                    JavaScript::Expression(Expression::$variant(e))
                }
            }
        )*
    };
}

expression_from!(
    Identifier(Identifier),
    Literal(Literal),
    Raw(RawExpr),
    Template(TemplateExpr),
    Call(CallExpr),
    CallChain(CallChainExpr),
    Assignment(AssignmentExpr),
    Fn(FunctionExpr),
    NamedFn(NamedFunctionExpr),
);

macro_rules! statement_from {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(
            impl From<$t> for Statement {
                fn from(s: $t) -> Self {
                    Statement::$variant(s)
                }
            }

            impl From<$t> for JavaScript {
                fn from(s: $t) -> Self {
                    JavaScript::Statement(Statement::$variant(s))
                }
            }
        )*
    };
}

statement_from!(
    Raw(RawStmt),
    Expression(ExpressionStatement),
    Sequence(StatementSequence),
    If(IfStmt),
    DeclareVar(DeclareVarStmt),
    Return(ReturnStatement),
);

impl From<&Literal> for Expression {
    fn from(literal: &Literal) -> Self {
        Expression::Literal(literal.clone())
    }
}

impl From<&RawExpr> for Expression {
    fn from(raw: &RawExpr) -> Self {
        Expression::Raw(raw.clone())
    }
}

impl From<Expression> for JavaScript {
    fn from(expr: Expression) -> Self {
        JavaScript::Expression(expr)
    }
}

impl From<Statement> for JavaScript {
    fn from(stmt: Statement) -> Self {
        JavaScript::Statement(stmt)
    }
}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Expression::Identifier(e) => e.hash(state),
            Expression::Literal(e) => e.hash(state),
            Expression::Raw(e) => e.hash(state),
            _ => {}
        }
    }
}

// Helper functions for creating common nodes

pub fn ident(name: impl Into<String>) -> Result<Expression> {
    Ok(Expression::Identifier(Identifier::new(name)?))
}

pub fn literal(value: impl Into<Value>) -> Expression {
    coercion::as_expression(value)
}

pub fn raw(code: impl Into<String>) -> Expression {
    Expression::Raw(RawExpr::new(code))
}

pub fn raw_stmt(code: impl Into<String>) -> Statement {
    Statement::Raw(RawStmt::new(code))
}

pub fn null_expr() -> Expression {
    Expression::Raw(NULL.clone())
}

pub fn this_expr() -> Expression {
    Expression::Raw(THIS.clone())
}

pub fn call(function: impl Into<String>, args: Vec<Value>) -> Result<Expression> {
    Ok(Expression::Call(CallExpr::with_values(function, args)?))
}

pub fn chain() -> CallChainExpr {
    CallChainExpr::new()
}

pub fn assign(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    Expression::Assignment(AssignmentExpr::new(left, right))
}

pub fn fn_expr(params: &[&str], body: impl Into<JavaScript>) -> Result<Expression> {
    Ok(Expression::Fn(FunctionExpr::with_params(
        coercion::as_identifier_list(params.iter().copied())?,
        body,
    )))
}

pub fn named_fn(
    name: impl Into<String>,
    params: &[&str],
    body: impl Into<JavaScript>,
) -> Result<Expression> {
    Ok(Expression::NamedFn(NamedFunctionExpr::new(
        Identifier::new(name)?,
        FunctionExpr::with_params(coercion::as_identifier_list(params.iter().copied())?, body),
    )))
}

pub fn if_stmt(condition: impl Into<Expression>, true_case: impl Into<JavaScript>) -> Statement {
    Statement::If(IfStmt::new(condition, true_case))
}

pub fn declare_var(name: impl Into<String>, value: impl Into<Value>) -> Result<Statement> {
    Ok(Statement::DeclareVar(DeclareVarStmt::with_value(name, value)?))
}

pub fn return_stmt(value: impl Into<Value>) -> Statement {
    Statement::Return(ReturnStatement::new(value))
}

pub fn statements<I>(scripts: I) -> Statement
where
    I: IntoIterator,
    I::Item: Into<JavaScript>,
{
    Statement::Sequence(StatementSequence::of(scripts))
}
