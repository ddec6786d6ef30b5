/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * License:
 * This file is part of the Brewin interpreter project.
 *
 * Brewin is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::ast::{CallExpr, FunctionDecl, Param, Stmt};
use crate::error::BrewinError;

use super::parser::Parser;

impl Parser {
    /// func_def := "func" IDENT "(" params? ")" "{" statement* "}"
    pub(crate) fn function_decl(&mut self) -> Result<FunctionDecl, BrewinError> {
        self.expect_keyword("func")?;
        let name = self.expect_identifier("function name")?;
        let params = self.param_list()?;
        let body = self.block()?;

        Ok(FunctionDecl {
            name: Some(name),
            params,
            body,
        })
    }

    /// params := ("ref"? IDENT ("," "ref"? IDENT)*)?
    pub(crate) fn param_list(&mut self) -> Result<Vec<Param>, BrewinError> {
        self.expect_symbol("(")?;
        let mut params = Vec::new();

        if !self.check_symbol(")") {
            loop {
                let by_ref = self.match_keyword("ref");
                let name = self.expect_identifier("parameter name")?;
                params.push(Param { name, by_ref });

                if !self.match_symbol(",") {
                    break;
                }
            }
        }

        self.expect_symbol(")")?;
        Ok(params)
    }

    /// block := "{" statement* "}"
    pub(crate) fn block(&mut self) -> Result<Vec<Stmt>, BrewinError> {
        self.expect_symbol("{")?;
        let mut statements = Vec::new();

        while !self.check_symbol("}") && !self.is_at_end() {
            statements.push(self.statement()?);
        }

        self.expect_symbol("}")?;
        Ok(statements)
    }

    pub(crate) fn statement(&mut self) -> Result<Stmt, BrewinError> {
        if self.check_keyword("if") {
            return self.if_statement();
        }
        if self.check_keyword("while") {
            return self.while_statement();
        }
        if self.check_keyword("return") {
            return self.return_statement();
        }
        self.simple_statement()
    }

    /// if := "if" "(" expression ")" block ("else" block)?
    fn if_statement(&mut self) -> Result<Stmt, BrewinError> {
        self.expect_keyword("if")?;
        self.expect_symbol("(")?;
        let condition = self.expression()?;
        self.expect_symbol(")")?;

        let then_branch = self.block()?;
        let else_branch = if self.match_keyword("else") {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// while := "while" "(" expression ")" block
    fn while_statement(&mut self) -> Result<Stmt, BrewinError> {
        self.expect_keyword("while")?;
        self.expect_symbol("(")?;
        let condition = self.expression()?;
        self.expect_symbol(")")?;
        let body = self.block()?;

        Ok(Stmt::While { condition, body })
    }

    /// return := "return" expression? ";"
    fn return_statement(&mut self) -> Result<Stmt, BrewinError> {
        self.expect_keyword("return")?;
        let expression = if self.check_symbol(";") {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect_symbol(";")?;

        Ok(Stmt::Return(expression))
    }

    /// Either an assignment or a call statement, both of which start with
    /// an identifier.
    fn simple_statement(&mut self) -> Result<Stmt, BrewinError> {
        let name = self.expect_identifier("a statement")?;

        if self.check_symbol("(") {
            let args = self.argument_list()?;
            self.expect_symbol(";")?;
            return Ok(Stmt::Call(CallExpr { name, args }));
        }

        self.expect_symbol("=")?;
        let expression = self.expression()?;
        self.expect_symbol(";")?;

        Ok(Stmt::Assign { name, expression })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Expr, Stmt};
    use crate::error::ErrorKind;
    use crate::parser::parse_program;

    #[test]
    fn parses_functions_with_ref_params() {
        let program = parse_program("func swap(ref a, ref b) { t = a; a = b; b = t; }").unwrap();
        let func = &program.functions[0];
        assert_eq!(func.name.as_deref(), Some("swap"));
        assert_eq!(func.arity(), 2);
        assert!(func.params.iter().all(|param| param.by_ref));
        assert_eq!(func.body.len(), 3);
    }

    #[test]
    fn parses_if_else_and_while() {
        let program = parse_program(
            "func main() { while (x) { if (y) { a(); } else { b(); } } }",
        )
        .unwrap();
        let Stmt::While { body, .. } = &program.functions[0].body[0] else {
            panic!("expected a while statement");
        };
        let Stmt::If { else_branch, .. } = &body[0] else {
            panic!("expected an if statement");
        };
        assert!(else_branch.is_some());
    }

    #[test]
    fn parses_bare_and_valued_returns() {
        let program = parse_program("func f() { return; } func g() { return 1; }").unwrap();
        assert_eq!(program.functions[0].body[0], Stmt::Return(None));
        assert_eq!(
            program.functions[1].body[0],
            Stmt::Return(Some(Expr::Int(1)))
        );
    }

    #[test]
    fn rejects_missing_semicolon() {
        let error = parse_program("func main() { x = 1 }").unwrap_err();
        assert_eq!(error.kind, ErrorKind::ParseError);
    }

    #[test]
    fn rejects_stray_top_level_statements() {
        let error = parse_program("x = 1;").unwrap_err();
        assert_eq!(error.kind, ErrorKind::ParseError);
    }
}
