use super::typed::*;

pub trait ForEachExpression {
    /// Visits every expression in post-order, operands before their parent.
    fn for_each_expression<F: FnMut(&Expression)>(&self, f: F) -> F;
}

impl ForEachExpression for Expression {
    fn for_each_expression<F: FnMut(&Expression)>(&self, mut f: F) -> F {
        match self {
            Expression::BinaryOp { left, right, .. } => {
                f = left.for_each_expression(f);
                f = right.for_each_expression(f);
            }
            Expression::NumericLiteral { .. } => {}
            Expression::Var { .. } => {}
        }

        f(self);
        f
    }
}

impl ForEachExpression for Statement {
    fn for_each_expression<F: FnMut(&Expression)>(&self, mut f: F) -> F {
        match self {
            Statement::Assignment { target, value, .. } => {
                f = target.for_each_expression(f);
                value.for_each_expression(f)
            }
        }
    }
}

impl ForEachExpression for Routine {
    fn for_each_expression<F: FnMut(&Expression)>(&self, mut f: F) -> F {
        for stmt in self.body.iter() {
            f = stmt.for_each_expression(f);
        }
        f
    }
}
