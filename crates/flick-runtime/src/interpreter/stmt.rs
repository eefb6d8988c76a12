//! Statement execution
//!
//! `exec_stmt` reports whether control flows onward or a `ret` fired.
//! Blocks intercept the return signal, so a `ret` exits the nearest
//! enclosing block: a function body's block hands the value to the call,
//! while `if` and `w` discard the block result and keep executing.

use crate::ast::{Block, ElseBranch, Expr, IfStmt, Print, Stmt, WhileStmt};
use crate::interpreter::expr::apply_binary;
use crate::interpreter::{ControlFlow, Interpreter};
use crate::value::{RuntimeError, Value};
use std::io::Write;
use std::rc::Rc;

impl<W: Write> Interpreter<W> {
    /// Execute a single statement
    pub(super) fn exec_stmt(&mut self, stmt: &Stmt) -> Result<ControlFlow, RuntimeError> {
        match stmt {
            Stmt::Expr(expr) => {
                // A call in statement position may legitimately return
                // nothing; every other expression evaluates and discards.
                match expr {
                    Expr::Call(call) => {
                        self.eval_call(call)?;
                    }
                    other => {
                        self.eval_expr(other)?;
                    }
                }
                Ok(ControlFlow::Normal)
            }
            Stmt::Assign(assign) => {
                let value = self.eval_expr(&assign.value)?;
                self.environment.insert(assign.name.clone(), value);
                Ok(ControlFlow::Normal)
            }
            Stmt::CompoundAssign(assign) => {
                // Requires an existing binding, unlike plain assignment
                let current = self.get_variable(&assign.name)?;
                let operand = self.eval_expr(&assign.value)?;
                let updated = apply_binary(assign.op.binary_op(), current, operand)?;
                self.environment.insert(assign.name.clone(), updated);
                Ok(ControlFlow::Normal)
            }
            Stmt::IndexAssign(assign) => {
                self.exec_index_assign(assign)?;
                Ok(ControlFlow::Normal)
            }
            Stmt::Print(print) => {
                self.exec_print(print)?;
                Ok(ControlFlow::Normal)
            }
            Stmt::If(if_stmt) => {
                self.exec_if(if_stmt)?;
                Ok(ControlFlow::Normal)
            }
            Stmt::While(while_stmt) => {
                self.exec_while(while_stmt)?;
                Ok(ControlFlow::Normal)
            }
            Stmt::FunctionDecl(decl) => {
                self.environment
                    .insert(decl.name.clone(), Value::Function(Rc::new(decl.clone())));
                Ok(ControlFlow::Normal)
            }
            Stmt::Return(ret) => {
                let value = self.eval_expr(&ret.value)?;
                Ok(ControlFlow::Return(value))
            }
        }
    }

    /// Execute a block; `Some` carries an intercepted return value
    pub(super) fn exec_block(&mut self, block: &Block) -> Result<Option<Value>, RuntimeError> {
        for statement in &block.statements {
            if let ControlFlow::Return(value) = self.exec_stmt(statement)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Evaluate an `if`/`w` condition, which must be a comparison
    fn eval_condition(&mut self, cond: &Expr) -> Result<bool, RuntimeError> {
        match cond {
            Expr::Comparison(cmp) => self.eval_comparison(cmp),
            _ => Err(RuntimeError::NonBooleanCondition),
        }
    }

    fn exec_if(&mut self, if_stmt: &IfStmt) -> Result<(), RuntimeError> {
        if self.eval_condition(&if_stmt.cond)? {
            self.exec_block(&if_stmt.then_block)?;
            return Ok(());
        }
        match &if_stmt.else_branch {
            Some(ElseBranch::Elif(elif)) => self.exec_if(elif),
            Some(ElseBranch::Else(block)) => {
                self.exec_block(block)?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn exec_while(&mut self, while_stmt: &WhileStmt) -> Result<(), RuntimeError> {
        while self.eval_condition(&while_stmt.cond)? {
            self.exec_block(&while_stmt.body)?;
        }
        Ok(())
    }

    fn exec_index_assign(
        &mut self,
        assign: &crate::ast::IndexAssign,
    ) -> Result<(), RuntimeError> {
        let elements = match self.get_variable(&assign.array)? {
            Value::Array(elements) => elements,
            other => {
                return Err(RuntimeError::NotAnArray {
                    found: other.type_name(),
                })
            }
        };

        let position = match self.eval_expr(&assign.index)? {
            Value::Int(position) => position,
            other => {
                return Err(RuntimeError::NonIntegerIndex {
                    found: other.type_name(),
                })
            }
        };

        let value = self.eval_expr(&assign.value)?;

        let mut elements = elements.borrow_mut();
        let len = elements.len() as i64;
        let slot = if position < 0 { len + position } else { position };
        if !(0..len).contains(&slot) {
            return Err(RuntimeError::IndexOutOfBounds { index: position });
        }
        elements[slot as usize] = value;
        Ok(())
    }

    /// Print evaluated expressions, space-separated, on one line
    fn exec_print(&mut self, print: &Print) -> Result<(), RuntimeError> {
        let mut rendered = Vec::with_capacity(print.expressions.len());
        for expression in &print.expressions {
            rendered.push(self.eval_expr(expression)?.to_string());
        }
        writeln!(self.out, "{}", rendered.join(" ")).map_err(|e| RuntimeError::Io {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> (Result<(), RuntimeError>, String) {
        let program = parse(tokenize(source).unwrap()).unwrap();
        let mut interpreter = Interpreter::with_output(Vec::new());
        let result = interpreter.interpret(&program);
        let output = String::from_utf8(interpreter.into_output()).unwrap();
        (result, output)
    }

    fn output_of(source: &str) -> String {
        let (result, output) = run(source);
        assert_eq!(result, Ok(()));
        output
    }

    #[test]
    fn test_print_joins_with_spaces() {
        assert_eq!(output_of("p 'x is', 1 + 2, 'done'"), "x is 3 done\n");
    }

    #[test]
    fn test_if_elif_else_dispatch() {
        let source = "\
x = 2
if x eq 1 { p 'one' } eli x eq 2 { p 'two' } el { p 'other' }
if x eq 9 { p 'nine' } el { p 'not nine' }
if x gr 0 { p 'positive' }";
        assert_eq!(output_of(source), "two\nnot nine\npositive\n");
    }

    #[test]
    fn test_while_countdown() {
        assert_eq!(output_of("n = 3\nw n gr 0 { p n\nn -= 1 }"), "3\n2\n1\n");
    }

    #[test]
    fn test_condition_must_be_comparison() {
        let (result, _) = run("if 1 { p 'yes' }");
        assert_eq!(result, Err(RuntimeError::NonBooleanCondition));
        let (result, _) = run("w 1 { p 'yes' }");
        assert_eq!(result, Err(RuntimeError::NonBooleanCondition));
    }

    #[test]
    fn test_compound_assignment_needs_existing_binding() {
        let (result, _) = run("x += 1");
        assert_eq!(
            result,
            Err(RuntimeError::UndefinedVariable {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn test_compound_assignment_forms() {
        let source = "\
x = 10
x += 5
p x
x -= 3
p x
x *= 2
p x
x /= 6
p x
y = 7
y %= 3
p y";
        assert_eq!(output_of(source), "15\n12\n24\n4.0\n1\n");
    }

    #[test]
    fn test_index_assignment_and_negative_indices() {
        let source = "\
a = [1, 2, 3]
a[0] = 9
a[-1] = 7
p a";
        assert_eq!(output_of(source), "[9, 2, 7]\n");
    }

    #[test]
    fn test_index_assignment_out_of_bounds() {
        let (result, _) = run("a = [1]\na[5] = 0");
        assert_eq!(result, Err(RuntimeError::IndexOutOfBounds { index: 5 }));
    }

    #[test]
    fn test_return_exits_nearest_block_only() {
        // The inner `ret` leaves the if-block, not the function
        let source = "\
fu f(x) {
    if x gr 0 {
        ret 1
    }
    ret 2
}
p f(5)";
        assert_eq!(output_of(source), "2\n");
    }

    #[test]
    fn test_return_from_function_body() {
        let source = "\
fu double(n) {
    ret n * 2
}
p double(21)";
        assert_eq!(output_of(source), "42\n");
    }

    #[test]
    fn test_call_without_return_as_statement_is_fine() {
        let source = "\
fu greet(name) {
    p 'hi', name
}
greet('flick')";
        assert_eq!(output_of(source), "hi flick\n");
    }

    #[test]
    fn test_call_without_return_as_expression_fails() {
        let source = "fu nop() { p 1 }\nx = nop()";
        let (result, _) = run(source);
        assert_eq!(
            result,
            Err(RuntimeError::MissingReturnValue {
                name: "nop".to_string()
            })
        );
    }

    #[test]
    fn test_functions_do_not_see_caller_variables() {
        let source = "\
x = 1
fu f() {
    ret x
}
p f()";
        let (result, _) = run(source);
        assert_eq!(
            result,
            Err(RuntimeError::UndefinedVariable {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn test_array_aliasing_through_calls_and_bindings() {
        let source = "\
a = [1, 2]
b = a
b[0] = 9
p a";
        assert_eq!(output_of(source), "[9, 2]\n");
    }
}
