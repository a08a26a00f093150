//! The closed set of node variants and the category lattice above them.
//!
//! Every per-variant item in the crate (structs, the `Node` enum, dispatch,
//! the visitor traits, dumping, the builder) is expanded from this one table,
//! so adding a variant here is the only edit needed to extend the tree.
//!
//! The table is handed to a callback macro in two sections:
//!
//! ```text
//! categories { Category: ParentCategory, ... }
//! nodes { Variant: ParentCategory { leaf: Type, ... ; child: node|nodes, ... } ... }
//! ```
//!
//! Leaves are primitive values; `node` children hold one [`Node`](crate::ast::Node),
//! `nodes` children hold an ordered sequence. `AnyNode` is the lattice root and
//! never appears on the left-hand side.

#[macro_export]
macro_rules! for_each_node {
    ($callback:ident) => {
        $callback! {
            categories {
                TypeDefBase: AnyNode,
                Initializer: AnyNode,
                ImportStatement: AnyNode,
                Statement: AnyNode,
                BreakStatement: Statement,
                ContinueStatement: Statement,
                ReturnStatement: Statement,
                TryCatchStatement: Statement,
                MethodDef: AnyNode,
                VariableDeclarator: AnyNode,
                Type: AnyNode,
                ReferenceType: Type,
                SwitchCase: AnyNode,
                Body: AnyNode,
                ExpressionList: AnyNode,
                Expression: AnyNode,
                AssignmentExpression: Expression,
                NumericAssignmentExpression: AssignmentExpression,
                ShiftAssignmentExpression: AssignmentExpression,
                BitwiseAssignmentExpression: AssignmentExpression,
                BinaryExpression: Expression,
                BooleanExpression: BinaryExpression,
                BitwiseBinaryExpression: BinaryExpression,
                EqualityExpression: BinaryExpression,
                ComparisonExpression: BinaryExpression,
                ShiftBinaryExpression: BinaryExpression,
                NumericBinaryExpression: BinaryExpression,
                UnaryExpression: Expression,
                IncrementExpression: UnaryExpression,
                PrefixIncrementExpression: IncrementExpression,
                PostfixIncrementExpression: IncrementExpression,
                NumericUnaryExpression: UnaryExpression,
                Primary: Expression,
                LexicalLiteral: Primary,
                Instantiation: Primary,
                ClassInstantiation: Instantiation,
                NamedClassInstantiation: ClassInstantiation,
                AnonymousClassInstantiation: ClassInstantiation,
                ArrayInstantiation: Instantiation,
                UninitializedArrayInstantiation: ArrayInstantiation,
                InitializedArrayInstantiation: ArrayInstantiation,
                VariableReference: Primary,
                NameReference: VariableReference,
                ThisReference: VariableReference,
                SuperReference: VariableReference,
                FunctionInvocation: Primary,
                MethodInvocation: FunctionInvocation,
                ThisConstructorInvocation: FunctionInvocation,
                SuperConstructorInvocation: FunctionInvocation
            }
            nodes {
                // Compilation units and names
                SourceFile: AnyNode { ; package_statements: nodes, import_statements: nodes, types: nodes }
                ModifiersAndVisibility: AnyNode { modifiers: $crate::ast::Modifiers ; }
                CompoundWord: AnyNode { ; words: nodes }
                Word: AnyNode { text: String ; }

                // Type definitions
                ClassDef: TypeDefBase { ; mav: node, name: node, type_parameters: nodes, superclass: node, interfaces: nodes, body: node }
                InnerClassDef: TypeDefBase { ; mav: node, name: node, type_parameters: nodes, superclass: node, interfaces: nodes, body: node }
                InterfaceDef: TypeDefBase { ; mav: node, name: node, type_parameters: nodes, interfaces: nodes, body: node }
                InnerInterfaceDef: TypeDefBase { ; mav: node, name: node, type_parameters: nodes, interfaces: nodes, body: node }

                // Members
                ConstructorDef: AnyNode { ; name: node, mav: node, parameters: nodes, throws: nodes, statements: node }
                InstanceInitializer: Initializer { ; code: node }
                StaticInitializer: Initializer { ; code: node }
                ConcreteMethodDef: MethodDef { ; mav: node, type_params: nodes, result: node, name: node, params: nodes, throws: nodes, body: node }
                AbstractMethodDef: MethodDef { ; mav: node, type_params: nodes, result: node, name: node, params: nodes, throws: nodes }
                FormalParameter: AnyNode { is_final: bool ; declarator: node }
                VariableDeclaration: AnyNode { ; mav: node, declarators: nodes }
                UninitializedVariableDeclarator: VariableDeclarator { ; ty: node, name: node }
                InitializedVariableDeclarator: VariableDeclarator { ; ty: node, name: node, initializer: node }
                TypeParameter: AnyNode { ; variable: node, bound: node }
                ArrayInitializer: AnyNode { ; items: nodes }

                // Packages and imports
                PackageStatement: AnyNode { ; cword: node }
                ClassImportStatement: ImportStatement { ; cword: node }
                PackageImportStatement: ImportStatement { ; cword: node }

                // Statements
                LabeledStatement: Statement { ; label: node, statement: node }
                Block: Statement { ; statements: node }
                ExpressionStatement: Statement { ; expression: node }
                SwitchStatement: Statement { ; test: node, cases: nodes }
                IfThenStatement: Statement { ; test_expression: node, then_statement: node }
                IfThenElseStatement: Statement { ; test_expression: node, then_statement: node, else_statement: node }
                WhileStatement: Statement { ; condition: node, code: node }
                DoStatement: Statement { ; code: node, condition: node }
                ForStatement: Statement { ; init: node, condition: node, update: node, code: node }
                LabeledBreakStatement: BreakStatement { ; label: node }
                UnlabeledBreakStatement: BreakStatement { ; }
                LabeledContinueStatement: ContinueStatement { ; label: node }
                UnlabeledContinueStatement: ContinueStatement { ; }
                VoidReturnStatement: ReturnStatement { ; }
                ValueReturnStatement: ReturnStatement { ; value: node }
                ThrowStatement: Statement { ; thrown: node }
                SynchronizedStatement: Statement { ; lock_expr: node, block: node }
                TryCatchFinallyStatement: TryCatchStatement { ; try_block: node, catch_blocks: nodes, finally_block: node }
                NormalTryCatchStatement: TryCatchStatement { ; try_block: node, catch_blocks: nodes }
                EmptyStatement: Statement { ; }

                // Types
                PrimitiveType: Type { name: String ; }
                ArrayType: Type { name: String ; element_type: node }
                MemberType: ReferenceType { name: String ; left: node, right: node }
                ClassOrInterfaceType: ReferenceType { name: String ; type_arguments: nodes }
                TypeVariable: ReferenceType { name: String ; }
                VoidReturn: AnyNode { name: String ; }

                // Switch cases, catch blocks, bodies
                LabeledCase: SwitchCase { ; label: node, code: node }
                DefaultCase: SwitchCase { ; code: node }
                CatchBlock: AnyNode { ; exception: node, block: node }
                BracedBody: Body { ; statements: nodes }
                UnbracedBody: Body { ; statements: nodes }

                // Expression lists
                ParenthesizedExpressionList: ExpressionList { ; expressions: nodes }
                UnparenthesizedExpressionList: ExpressionList { ; expressions: nodes }
                DimensionExpressionList: ExpressionList { ; expressions: nodes }
                EmptyForCondition: AnyNode { ; }

                // Assignments
                SimpleAssignmentExpression: AssignmentExpression { ; name: node, value: node }
                PlusAssignmentExpression: AssignmentExpression { ; name: node, value: node }
                MinusAssignmentExpression: NumericAssignmentExpression { ; name: node, value: node }
                MultiplyAssignmentExpression: NumericAssignmentExpression { ; name: node, value: node }
                DivideAssignmentExpression: NumericAssignmentExpression { ; name: node, value: node }
                ModAssignmentExpression: NumericAssignmentExpression { ; name: node, value: node }
                LeftShiftAssignmentExpression: ShiftAssignmentExpression { ; name: node, value: node }
                RightSignedShiftAssignmentExpression: ShiftAssignmentExpression { ; name: node, value: node }
                RightUnsignedShiftAssignmentExpression: ShiftAssignmentExpression { ; name: node, value: node }
                BitwiseAndAssignmentExpression: BitwiseAssignmentExpression { ; name: node, value: node }
                BitwiseOrAssignmentExpression: BitwiseAssignmentExpression { ; name: node, value: node }
                BitwiseXorAssignmentExpression: BitwiseAssignmentExpression { ; name: node, value: node }

                // Binary operators
                OrExpression: BooleanExpression { ; left: node, right: node }
                AndExpression: BooleanExpression { ; left: node, right: node }
                BitwiseOrExpression: BitwiseBinaryExpression { ; left: node, right: node }
                BitwiseXorExpression: BitwiseBinaryExpression { ; left: node, right: node }
                BitwiseAndExpression: BitwiseBinaryExpression { ; left: node, right: node }
                EqualsExpression: EqualityExpression { ; left: node, right: node }
                NotEqualExpression: EqualityExpression { ; left: node, right: node }
                LessThanExpression: ComparisonExpression { ; left: node, right: node }
                LessThanOrEqualExpression: ComparisonExpression { ; left: node, right: node }
                GreaterThanExpression: ComparisonExpression { ; left: node, right: node }
                GreaterThanOrEqualExpression: ComparisonExpression { ; left: node, right: node }
                LeftShiftExpression: ShiftBinaryExpression { ; left: node, right: node }
                RightSignedShiftExpression: ShiftBinaryExpression { ; left: node, right: node }
                RightUnsignedShiftExpression: ShiftBinaryExpression { ; left: node, right: node }
                PlusExpression: BinaryExpression { ; left: node, right: node }
                MinusExpression: NumericBinaryExpression { ; left: node, right: node }
                MultiplyExpression: NumericBinaryExpression { ; left: node, right: node }
                DivideExpression: NumericBinaryExpression { ; left: node, right: node }
                ModExpression: NumericBinaryExpression { ; left: node, right: node }

                // Unary operators
                PositivePrefixIncrementExpression: PrefixIncrementExpression { ; value: node }
                NegativePrefixIncrementExpression: PrefixIncrementExpression { ; value: node }
                PositivePostfixIncrementExpression: PostfixIncrementExpression { ; value: node }
                NegativePostfixIncrementExpression: PostfixIncrementExpression { ; value: node }
                PositiveExpression: NumericUnaryExpression { ; value: node }
                NegativeExpression: NumericUnaryExpression { ; value: node }
                BitwiseNotExpression: UnaryExpression { ; value: node }
                NotExpression: UnaryExpression { ; value: node }

                // Other expressions
                ConditionalExpression: Expression { ; condition: node, for_true: node, for_false: node }
                InstanceofExpression: Expression { ; value: node, ty: node }
                CastExpression: Expression { ; ty: node, value: node }

                // Literals
                IntegerLiteral: LexicalLiteral { value: i32 ; }
                LongLiteral: LexicalLiteral { value: i64 ; }
                DoubleLiteral: LexicalLiteral { value: f64 ; }
                FloatLiteral: LexicalLiteral { value: f32 ; }
                BooleanLiteral: LexicalLiteral { value: bool ; }
                CharLiteral: LexicalLiteral { value: char ; }
                StringLiteral: LexicalLiteral { value: String ; }
                NullLiteral: LexicalLiteral { ; }

                // Instantiations
                SimpleNamedClassInstantiation: NamedClassInstantiation { ; ty: node, arguments: node }
                ComplexNamedClassInstantiation: NamedClassInstantiation { ; enclosing: node, ty: node, arguments: node }
                SimpleAnonymousClassInstantiation: AnonymousClassInstantiation { ; ty: node, arguments: node, body: node }
                ComplexAnonymousClassInstantiation: AnonymousClassInstantiation { ; enclosing: node, ty: node, arguments: node, body: node }
                SimpleUninitializedArrayInstantiation: UninitializedArrayInstantiation { ; ty: node, dimension_sizes: node }
                ComplexUninitializedArrayInstantiation: UninitializedArrayInstantiation { ; enclosing: node, ty: node, dimension_sizes: node }
                SimpleInitializedArrayInstantiation: InitializedArrayInstantiation { ; ty: node, initializer: node }
                ComplexInitializedArrayInstantiation: InitializedArrayInstantiation { ; enclosing: node, ty: node, initializer: node }

                // References
                SimpleNameReference: NameReference { ; name: node }
                ComplexNameReference: NameReference { ; enclosing: node, name: node }
                SimpleThisReference: ThisReference { ; }
                ComplexThisReference: ThisReference { ; enclosing: node }
                SimpleSuperReference: SuperReference { ; }
                ComplexSuperReference: SuperReference { ; enclosing: node }

                // Invocations
                SimpleMethodInvocation: MethodInvocation { ; name: node, arguments: node }
                ComplexMethodInvocation: MethodInvocation { ; enclosing: node, name: node, arguments: node }
                SimpleThisConstructorInvocation: ThisConstructorInvocation { ; arguments: node }
                ComplexThisConstructorInvocation: ThisConstructorInvocation { ; enclosing: node, arguments: node }
                SimpleSuperConstructorInvocation: SuperConstructorInvocation { ; arguments: node }
                ComplexSuperConstructorInvocation: SuperConstructorInvocation { ; enclosing: node, arguments: node }

                // Remaining primaries
                ClassLiteral: Primary { ; ty: node }
                ArrayAccess: Primary { ; array: node, index: node }
                Parenthesized: Primary { ; value: node }
                EmptyExpression: Primary { ; }
            }
        }
    };
}
