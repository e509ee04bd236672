/// The evaluator module reduces a syntax tree to a number.
///
/// The evaluator traverses the AST bottom-up and performs the arithmetic. It
/// never fails: division by zero and domain errors surface as NaN or infinity
/// the way IEEE-754 defines them.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Implements the factorial and its gamma extension.
/// - Dispatches calls to the builtin table.
pub mod evaluator;
/// The builtin function table.
///
/// A fixed, compile-time table mapping each function name to its native
/// implementation. Its arity is read by the parser and its implementations
/// are called by the evaluator.
pub mod function;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, a function name, an operator or a
/// piece of punctuation. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their position.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that honors operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and reports errors with position info.
/// - Resolves function names and checks their arity.
pub mod parser;
