//! Snippet preloaded into the editor on startup.

/// House Robber, solved with constant-space dynamic programming.
pub const HOUSE_ROBBER: &str = r#"/**
 * House Robber
 *
 * You are a professional robber planning to rob houses along a street. Each house has a certain amount of money stashed, the only constraint stopping you from robbing each of them is that adjacent houses have security systems connected and it will automatically contact the police if two adjacent houses were broken into on the same night.
 *
 * Given an integer array nums representing the amount of money of each house, return the maximum amount of money you can rob tonight without alerting the police.
 *
 * Example
 * Input
 * [1, 2, 3, 1]
 *
 * Output
 * 4
 *
 * Rob house 1 (1) and then house 3 (3). Total = 1 + 3 = 4.
 *
 * @param {number[]} nums - An array representing the amount of money in each house.
 * @return {number} - The maximum amount of money you can rob.
 */
const rob = function(nums) {
    if (!nums || nums.length === 0) {
        return 0;
    }
    if (nums.length === 1) {
        return nums[0];
    }

    // Initialize DP variables for the maximum profit up to the previous two houses.
    // 'prevMax' represents dp[i-1] (max profit up to the previous house).
    // 'currMax' represents dp[i] (max profit up to the current house).
    let prevMax = 0; // Max profit up to house i-2
    let currMax = 0; // Max profit up to house i-1

    // Iterate through each house's value
    for (const houseValue of nums) {
        // Option 1: Rob the current house (houseValue)
        // Profit: houseValue + max profit from houses up to i-2 (prevMax)

        // Option 2: Skip the current house
        // Profit: max profit from houses up to i-1 (currMax)

        // New maximum profit for the current index 'i' (temp)
        const temp = Math.max(houseValue + prevMax, currMax);

        // Shift the 'windows' for the next iteration
        // The old currMax (dp[i-1]) becomes the new prevMax (dp[i-2])
        prevMax = currMax;

        // The new max profit (dp[i]) becomes the new currMax (dp[i-1])
        currMax = temp;
    }

    // After iterating through all houses, currMax holds the maximum profit.
    return currMax;
};"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_not_blank() {
        assert!(!HOUSE_ROBBER.trim().is_empty());
        assert!(HOUSE_ROBBER.starts_with("/**"));
        assert!(HOUSE_ROBBER.ends_with("};"));
    }
}
