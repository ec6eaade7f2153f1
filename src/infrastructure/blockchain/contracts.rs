//! Solidity bindings for the contracts we read from

use alloy::sol;

sol! {
    /// Uniswap V3 Quoter (V1). Quotes revert internally, so they must be
    /// executed as `eth_call` simulations.
    #[derive(Debug, PartialEq, Eq)]
    #[sol(rpc)]
    contract UniswapV3Quoter {
        function quoteExactInputSingle(
            address tokenIn,
            address tokenOut,
            uint24 fee,
            uint256 amountIn,
            uint160 sqrtPriceLimitX96
        ) external returns (uint256 amountOut);
    }
}
