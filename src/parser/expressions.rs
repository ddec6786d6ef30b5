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

use std::rc::Rc;

use crate::ast::{BinaryOp, CallExpr, Expr, FunctionDecl, UnaryOp};
use crate::error::BrewinError;
use crate::lexer::token::TokenKind;

use super::parser::Parser;

impl Parser {
    /// Precedence climbing, loosest first:
    /// `||` -> `&&` -> `== !=` -> `< <= > >=` -> `+ -` -> `* /` -> unary
    pub(crate) fn expression(&mut self) -> Result<Expr, BrewinError> {
        self.or_expression()
    }

    fn or_expression(&mut self) -> Result<Expr, BrewinError> {
        let mut expr = self.and_expression()?;
        while self.match_symbol("||") {
            let rhs = self.and_expression()?;
            expr = binary(BinaryOp::Or, expr, rhs);
        }
        Ok(expr)
    }

    fn and_expression(&mut self) -> Result<Expr, BrewinError> {
        let mut expr = self.equality()?;
        while self.match_symbol("&&") {
            let rhs = self.equality()?;
            expr = binary(BinaryOp::And, expr, rhs);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, BrewinError> {
        let mut expr = self.comparison()?;
        loop {
            let op = if self.match_symbol("==") {
                BinaryOp::Eq
            } else if self.match_symbol("!=") {
                BinaryOp::Ne
            } else {
                return Ok(expr);
            };
            let rhs = self.comparison()?;
            expr = binary(op, expr, rhs);
        }
    }

    fn comparison(&mut self) -> Result<Expr, BrewinError> {
        let mut expr = self.term()?;
        loop {
            let op = if self.match_symbol("<=") {
                BinaryOp::Le
            } else if self.match_symbol("<") {
                BinaryOp::Lt
            } else if self.match_symbol(">=") {
                BinaryOp::Ge
            } else if self.match_symbol(">") {
                BinaryOp::Gt
            } else {
                return Ok(expr);
            };
            let rhs = self.term()?;
            expr = binary(op, expr, rhs);
        }
    }

    fn term(&mut self) -> Result<Expr, BrewinError> {
        let mut expr = self.factor()?;
        loop {
            let op = if self.match_symbol("+") {
                BinaryOp::Add
            } else if self.match_symbol("-") {
                BinaryOp::Sub
            } else {
                return Ok(expr);
            };
            let rhs = self.factor()?;
            expr = binary(op, expr, rhs);
        }
    }

    fn factor(&mut self) -> Result<Expr, BrewinError> {
        let mut expr = self.unary()?;
        loop {
            let op = if self.match_symbol("*") {
                BinaryOp::Mul
            } else if self.match_symbol("/") {
                BinaryOp::Div
            } else {
                return Ok(expr);
            };
            let rhs = self.unary()?;
            expr = binary(op, expr, rhs);
        }
    }

    fn unary(&mut self) -> Result<Expr, BrewinError> {
        let op = if self.match_symbol("-") {
            UnaryOp::Neg
        } else if self.match_symbol("!") {
            UnaryOp::Not
        } else {
            return self.primary();
        };
        let operand = self.unary()?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn primary(&mut self) -> Result<Expr, BrewinError> {
        match self.peek().kind {
            TokenKind::Int => {
                let token = self.advance();
                let span = token.span;
                let literal = token.lexeme.clone();
                let value = literal.parse::<i64>().map_err(|_| {
                    BrewinError::parse_error(
                        format!("integer literal '{}' out of range", literal),
                        span,
                    )
                })?;
                Ok(Expr::Int(value))
            }

            TokenKind::Str => Ok(Expr::Str(self.advance().lexeme.clone())),

            TokenKind::Keyword => {
                if self.match_keyword("true") {
                    Ok(Expr::Bool(true))
                } else if self.match_keyword("false") {
                    Ok(Expr::Bool(false))
                } else if self.match_keyword("nil") {
                    Ok(Expr::Nil)
                } else if self.check_keyword("lambda") {
                    self.lambda()
                } else {
                    Err(self.error_at_current("expected an expression"))
                }
            }

            TokenKind::Identifier => {
                let name = self.advance().lexeme.clone();
                if self.check_symbol("(") {
                    let args = self.argument_list()?;
                    Ok(Expr::Call(CallExpr { name, args }))
                } else {
                    Ok(Expr::Var(name))
                }
            }

            TokenKind::Symbol if self.check_symbol("(") => {
                self.advance();
                let expr = self.expression()?;
                self.expect_symbol(")")?;
                Ok(expr)
            }

            _ => Err(self.error_at_current("expected an expression")),
        }
    }

    /// lambda := "lambda" "(" params? ")" block
    ///
    /// Shares the declaration shape with `func`, just without a name.
    fn lambda(&mut self) -> Result<Expr, BrewinError> {
        self.expect_keyword("lambda")?;
        let params = self.param_list()?;
        let body = self.block()?;

        Ok(Expr::Lambda(Rc::new(FunctionDecl {
            name: None,
            params,
            body,
        })))
    }

    /// args := "(" (expression ("," expression)*)? ")"
    pub(crate) fn argument_list(&mut self) -> Result<Vec<Expr>, BrewinError> {
        self.expect_symbol("(")?;
        let mut args = Vec::new();

        if !self.check_symbol(")") {
            loop {
                args.push(self.expression()?);
                if !self.match_symbol(",") {
                    break;
                }
            }
        }

        self.expect_symbol(")")?;
        Ok(args)
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
